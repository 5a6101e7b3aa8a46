//! Print/export trigger. A busy flag guards double invocation; the short
//! delay before `window.print()` lets the busy state paint before the
//! dialog takes over the thread. The dialog's outcome is unobservable, so
//! the flag clears as soon as the call returns.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::toast::show_toast;

pub enum Msg {
    Clicked,
    Finished(Result<(), String>),
}

pub struct PrintButton {
    printing: bool,
}

impl Component for PrintButton {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { printing: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Clicked => {
                if self.printing {
                    return false;
                }
                self.printing = true;

                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(100).await;
                    let outcome = match web_sys::window() {
                        Some(window) => window.print().map_err(|err| format!("{err:?}")),
                        None => Err("no window available".to_string()),
                    };
                    link.send_message(Msg::Finished(outcome));
                });
                true
            }
            Msg::Finished(outcome) => {
                self.printing = false;
                match outcome {
                    Ok(()) => show_toast(
                        "Print dialog opened. Use your browser's options, typically including \"Save as PDF\".",
                    ),
                    Err(err) => show_toast(&format!("Could not open the print dialog: {err}")),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let label = if self.printing {
            "Preparing to Print..."
        } else {
            "Print / Save Voucher as PDF"
        };

        html! {
            <button
                type="button"
                class="print-button not-printable"
                disabled={self.printing}
                onclick={ctx.link().callback(|_| Msg::Clicked)}
            >
                { label }
            </button>
        }
    }
}
