use crate::app::App;

mod app;
mod components;
mod registry;
mod storage;
mod templates;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
