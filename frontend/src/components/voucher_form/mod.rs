//! Voucher edit form: root module wiring the Yew `Component` implementation
//! with submodules for props, messages, state, update logic, and the view.
//!
//! Every input event merges into the internal draft and emits it upward, so
//! the preview tracks keystrokes. When the parent commits new defaults the
//! `defaults` prop changes and the draft resets to it, discarding anything
//! not committed.

use yew::prelude::*;

use common::model::draft::VoucherDraft;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{FieldEdit, Msg};
pub use props::VoucherFormProps;
pub use state::VoucherFormComponent;

impl Component for VoucherFormComponent {
    type Message = Msg;
    type Properties = VoucherFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        VoucherFormComponent::from_defaults(&ctx.props().defaults)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().defaults != old_props.defaults {
            self.draft = VoucherDraft::from_record(&ctx.props().defaults);
            self.revalidate();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
