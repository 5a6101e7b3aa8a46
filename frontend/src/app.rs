//! Root component: owns the edit session and the selected template.
//!
//! Session start is synchronous: the defaults store is read once, the
//! initialization pass fills in code and dates, and both record copies are
//! ready before the first render. Committing defaults writes through to the
//! store and then re-seeds the session, which resets the form.

use chrono::Utc;
use yew::prelude::*;

use common::model::draft::VoucherDraft;
use common::model::template::TemplateId;
use common::model::voucher::VoucherRecord;
use common::session::EditSession;

use crate::components::print_button::PrintButton;
use crate::components::template_selector::TemplateSelector;
use crate::components::voucher_form::VoucherFormComponent;
use crate::components::voucher_preview::VoucherPreview;
use crate::storage;
use crate::toast::show_toast;

pub enum Msg {
    FormChanged(VoucherDraft),
    CommitDefaults(VoucherRecord),
    SelectTemplate(TemplateId),
}

pub struct App {
    session: EditSession,
    selected_template: TemplateId,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let stored = storage::load_defaults();
        Self {
            session: EditSession::start(stored, Utc::now()),
            selected_template: TemplateId::Default,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FormChanged(draft) => {
                self.session.on_field_change(&draft);
                true
            }
            Msg::CommitDefaults(record) => {
                storage::save_defaults(&record);
                self.session.on_defaults_committed(record, Utc::now());
                show_toast("Defaults saved. The form now starts from these values.");
                true
            }
            Msg::SelectTemplate(id) => {
                self.selected_template = id;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <main class="page">
                <header class="page-header not-printable">
                    <h1>{"Voucher Studio"}</h1>
                    <p>{"Create, customize, and print professional hotel stay vouchers."}</p>
                </header>

                <div class="workspace">
                    <div class="editor-column not-printable">
                        <VoucherFormComponent
                            defaults={self.session.form_defaults().clone()}
                            on_form_change={link.callback(Msg::FormChanged)}
                            on_save_defaults={link.callback(Msg::CommitDefaults)}
                        />
                        <TemplateSelector
                            selected={self.selected_template}
                            on_select={link.callback(Msg::SelectTemplate)}
                        />
                    </div>

                    <div class="preview-column">
                        <VoucherPreview
                            data={self.session.live().clone()}
                            template_id={self.selected_template}
                        />
                        <PrintButton />
                    </div>
                </div>

                <footer class="page-footer not-printable">
                    <p>{"All data stays in this browser. Saved defaults live in local storage."}</p>
                </footer>
            </main>
        }
    }
}
