//! Template picker: one thumbnail card per registered template.

use yew::prelude::*;

use common::model::template::TemplateId;

use crate::registry::ALL_TEMPLATES;

#[derive(Properties, PartialEq)]
pub struct TemplateSelectorProps {
    pub selected: TemplateId,
    pub on_select: Callback<TemplateId>,
}

pub struct TemplateSelector;

impl Component for TemplateSelector {
    type Message = ();
    type Properties = TemplateSelectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TemplateSelector
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="template-selector">
                <h3>{"Choose a Template"}</h3>
                <div class="template-options">
                    {
                        for ALL_TEMPLATES.iter().map(|entry| {
                            let id = entry.id;
                            let class = classes!(
                                "template-option",
                                (props.selected == id).then_some("selected"),
                            );
                            html! {
                                <button
                                    type="button"
                                    {class}
                                    onclick={props.on_select.reform(move |_| id)}
                                >
                                    <img
                                        src={entry.preview_image_url}
                                        alt={format!("{} preview", entry.name)}
                                    />
                                    <span>{ entry.name }</span>
                                </button>
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}
