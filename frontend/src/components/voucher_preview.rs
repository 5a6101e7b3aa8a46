//! Live preview: dispatches the current record to the selected template's
//! renderer. A failed registry lookup renders an explicit "not found" card
//! instead of a blank pane.

use yew::prelude::*;

use common::model::template::TemplateId;
use common::model::voucher::VoucherRecord;

use crate::registry::{template_by_id, PREVIEW_ELEMENT_ID};

#[derive(Properties, PartialEq)]
pub struct VoucherPreviewProps {
    pub data: VoucherRecord,
    pub template_id: TemplateId,
}

pub struct VoucherPreview;

impl Component for VoucherPreview {
    type Message = ();
    type Properties = VoucherPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        VoucherPreview
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let rendered = match template_by_id(props.template_id) {
            Some(entry) => (entry.render)(&props.data, PREVIEW_ELEMENT_ID),
            None => not_found(props.template_id),
        };

        html! {
            <div class="preview-panel">
                <h3 class="preview-title not-printable">{"Live Preview"}</h3>
                <div class="preview-scroll">{ rendered }</div>
            </div>
        }
    }
}

fn not_found(id: TemplateId) -> Html {
    html! {
        <div class="voucher voucher-missing">
            <h2>{"Error"}</h2>
            <p>{ format!("Template \"{id}\" not found. Please select a valid template.") }</p>
        </div>
    }
}
