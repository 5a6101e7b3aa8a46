//! Update logic for the edit form.
//!
//! Field edits merge into the draft, revalidate, and propagate upward so
//! the preview re-renders. The logo flow reads the picked file off-thread,
//! base64-encodes it into a data URI, and lands it in the draft like any
//! other field edit. "Save defaults" resolves the draft and hands the
//! concrete record to the parent; the store write and session reset happen
//! there.

use base64::engine::general_purpose;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::draft::VoucherDraft;
use common::model::voucher::{parse_date, RepTitle};

use crate::toast::show_toast;

use super::messages::{FieldEdit, Msg};
use super::state::VoucherFormComponent;

pub fn update(
    component: &mut VoucherFormComponent,
    ctx: &Context<VoucherFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Edit(edit) => {
            apply_edit(&mut component.draft, edit);
            component.revalidate();
            ctx.props().on_form_change.emit(component.draft.clone());
            true
        }
        Msg::LogoPicked(Some(file)) => {
            let mime = file.type_();
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let blob = Blob::from(file);
                match read_as_bytes(&blob).await {
                    Ok(bytes) => {
                        let mime = if mime.is_empty() {
                            "image/png".to_string()
                        } else {
                            mime
                        };
                        let encoded = general_purpose::STANDARD.encode(&bytes);
                        link.send_message(Msg::LogoEncoded(format!(
                            "data:{mime};base64,{encoded}"
                        )));
                    }
                    Err(err) => show_toast(&format!("Could not read the selected image: {err}")),
                }
            });
            false
        }
        Msg::LogoPicked(None) => {
            component.draft.logo_url = Some(String::new());
            component.revalidate();
            ctx.props().on_form_change.emit(component.draft.clone());
            true
        }
        Msg::LogoEncoded(data_uri) => {
            component.draft.logo_url = Some(data_uri);
            component.revalidate();
            ctx.props().on_form_change.emit(component.draft.clone());
            true
        }
        Msg::ClearLogo => {
            component.draft.logo_url = Some(String::new());
            if let Some(input) = component.logo_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            component.revalidate();
            ctx.props().on_form_change.emit(component.draft.clone());
            true
        }
        Msg::SaveDefaults => {
            ctx.props().on_save_defaults.emit(component.draft.resolve());
            false
        }
    }
}

fn apply_edit(draft: &mut VoucherDraft, edit: FieldEdit) {
    match edit {
        FieldEdit::RecipientName(v) => draft.recipient_name = Some(v),
        FieldEdit::Amount(v) => draft.amount = Some(v),
        FieldEdit::Message(v) => draft.message = Some(v),
        FieldEdit::ExpirationDate(raw) => draft.expiration_date = parse_date_input(&raw),
        FieldEdit::VoucherCode(v) => draft.voucher_code = Some(v),
        FieldEdit::HotelName(v) => draft.hotel_name = Some(v),
        FieldEdit::RepresentativeTitle(raw) => {
            draft.client_representative_title = Some(parse_title(&raw));
        }
        FieldEdit::RepresentativeName(v) => draft.client_representative_name = Some(v),
        FieldEdit::RoomName(v) => draft.room_name = Some(v),
        FieldEdit::BoardName(v) => draft.board_name = Some(v),
        FieldEdit::Adults(raw) => draft.number_of_adults = parse_count(&raw),
        FieldEdit::Children(raw) => draft.number_of_children = parse_count(&raw),
        FieldEdit::IssuerName(v) => draft.issuer_name = Some(v),
        FieldEdit::IssueDate(raw) => draft.issue_date = parse_date_input(&raw),
        FieldEdit::HotelAddress(v) => draft.hotel_address = Some(v),
        FieldEdit::HotelPhoneNumber(v) => draft.hotel_phone_number = Some(v),
        FieldEdit::HotelEmail(v) => draft.hotel_email = Some(v),
        FieldEdit::WebsiteUrl(v) => draft.website_url = Some(v),
    }
}

fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn parse_date_input(raw: &str) -> Option<DateTime<Utc>> {
    parse_date(raw)
}

fn parse_title(raw: &str) -> RepTitle {
    if raw == "Ms" { RepTitle::Ms } else { RepTitle::Mr }
}
