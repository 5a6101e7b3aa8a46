//! View rendering for the edit form: three titled sections mirroring how a
//! voucher is filled in (hotel and contact, recipient and stay, offer and
//! terms), with inline validation hints under each field.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::voucher::RepTitle;

use super::messages::{FieldEdit, Msg};
use super::state::VoucherFormComponent;

pub fn view(component: &VoucherFormComponent, ctx: &Context<VoucherFormComponent>) -> Html {
    let link = ctx.link();
    let draft = &component.draft;

    html! {
        <form class="voucher-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
            <h3 class="form-section-title">{"Hotel & Contact Details"}</h3>

            { text_field(component, link, "hotel-name", "hotel_name", "Hotel Name",
                "e.g., The Grand Plaza", "text",
                draft.hotel_name.clone().unwrap_or_default(), FieldEdit::HotelName) }

            { logo_field(component, link) }

            { text_field(component, link, "hotel-address", "hotel_address", "Hotel Address",
                "123 Main St, City, Country", "text",
                draft.hotel_address.clone().unwrap_or_default(), FieldEdit::HotelAddress) }

            <div class="field-row">
                { text_field(component, link, "hotel-phone", "hotel_phone_number", "Hotel Phone",
                    "(555) 123-4567", "text",
                    draft.hotel_phone_number.clone().unwrap_or_default(), FieldEdit::HotelPhoneNumber) }
                { text_field(component, link, "hotel-email", "hotel_email", "Hotel Email",
                    "info@example.com", "email",
                    draft.hotel_email.clone().unwrap_or_default(), FieldEdit::HotelEmail) }
            </div>

            { text_field(component, link, "website-url", "website_url", "Website URL (Optional)",
                "https://example.com", "text",
                draft.website_url.clone().unwrap_or_default(), FieldEdit::WebsiteUrl) }

            <h3 class="form-section-title">{"Voucher Recipient & Stay Details"}</h3>

            { text_field(component, link, "recipient-name", "recipient_name", "Guest Name (Recipient)",
                "e.g., Jane Doe", "text",
                draft.recipient_name.clone().unwrap_or_default(), FieldEdit::RecipientName) }

            <div class="field-row">
                { title_select(component, link) }
                { text_field(component, link, "rep-name", "client_representative_name",
                    "Client Representative Name", "e.g., John Smith (Travel Agent)", "text",
                    draft.client_representative_name.clone().unwrap_or_default(),
                    FieldEdit::RepresentativeName) }
            </div>

            { text_field(component, link, "room-name", "room_name", "Room Name/Type",
                "e.g., Deluxe King Suite", "text",
                draft.room_name.clone().unwrap_or_default(), FieldEdit::RoomName) }

            { text_field(component, link, "board-name", "board_name", "Board/Package Name",
                "e.g., All-Inclusive, Bed & Breakfast", "text",
                draft.board_name.clone().unwrap_or_default(), FieldEdit::BoardName) }

            <div class="field-row">
                { number_field(link, "adults", "Number of Adults", "e.g., 2",
                    draft.number_of_adults, FieldEdit::Adults) }
                { number_field(link, "children", "Number of Children", "e.g., 0",
                    draft.number_of_children, FieldEdit::Children) }
            </div>

            <h3 class="form-section-title">{"Voucher Offer & Terms"}</h3>

            { text_field(component, link, "amount", "amount", "Monetary Value/Discount ($)",
                "e.g., 50.00 or 0.00 if not applicable", "number",
                draft.amount.clone().unwrap_or_default(), FieldEdit::Amount) }

            { message_field(component, link) }

            <div class="field-row">
                { date_field(link, "issue-date", "Issue Date",
                    draft.issue_date, FieldEdit::IssueDate) }
                { date_field(link, "expiration-date", "Expiration Date (Optional)",
                    draft.expiration_date, FieldEdit::ExpirationDate) }
            </div>

            { text_field(component, link, "issuer-name", "issuer_name", "Issuer Name/Department",
                "e.g., Hotel Reservations Dept.", "text",
                draft.issuer_name.clone().unwrap_or_default(), FieldEdit::IssuerName) }

            { text_field(component, link, "voucher-code", "voucher_code", "Voucher Code",
                "e.g., HOTELSTAY24", "text",
                draft.voucher_code.clone().unwrap_or_default(), FieldEdit::VoucherCode) }

            <button
                type="button"
                class="save-defaults-button"
                onclick={link.callback(|_| Msg::SaveDefaults)}
            >
                {"Save Current Values as Default"}
            </button>
        </form>
    }
}

#[allow(clippy::too_many_arguments)]
fn text_field(
    component: &VoucherFormComponent,
    link: &Scope<VoucherFormComponent>,
    id: &'static str,
    field_key: &'static str,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    value: String,
    make: fn(String) -> FieldEdit,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        Msg::Edit(make(e.target_unchecked_into::<HtmlInputElement>().value()))
    });

    html! {
        <div class="field">
            <label for={id}>{ label }</label>
            <input id={id} type={input_type} value={value} placeholder={placeholder} {oninput} />
            { error_hint(component, field_key) }
        </div>
    }
}

fn number_field(
    link: &Scope<VoucherFormComponent>,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: Option<u32>,
    make: fn(String) -> FieldEdit,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        Msg::Edit(make(e.target_unchecked_into::<HtmlInputElement>().value()))
    });

    html! {
        <div class="field">
            <label for={id}>{ label }</label>
            <input
                id={id}
                type="number"
                min="0"
                step="1"
                value={value.map(|n| n.to_string()).unwrap_or_default()}
                placeholder={placeholder}
                {oninput}
            />
        </div>
    }
}

fn date_field(
    link: &Scope<VoucherFormComponent>,
    id: &'static str,
    label: &'static str,
    value: Option<chrono::DateTime<chrono::Utc>>,
    make: fn(String) -> FieldEdit,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        Msg::Edit(make(e.target_unchecked_into::<HtmlInputElement>().value()))
    });

    html! {
        <div class="field">
            <label for={id}>{ label }</label>
            <input
                id={id}
                type="date"
                value={value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}
                {oninput}
            />
        </div>
    }
}

fn message_field(component: &VoucherFormComponent, link: &Scope<VoucherFormComponent>) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        Msg::Edit(FieldEdit::Message(
            e.target_unchecked_into::<HtmlTextAreaElement>().value(),
        ))
    });

    html! {
        <div class="field">
            <label for="message">{"Message / Special Conditions (Optional)"}</label>
            <textarea
                id="message"
                rows="3"
                value={component.draft.message.clone().unwrap_or_default()}
                placeholder="e.g., Enjoy your complimentary stay! Subject to availability. Non-transferable."
                {oninput}
            />
            { error_hint(component, "message") }
        </div>
    }
}

fn title_select(component: &VoucherFormComponent, link: &Scope<VoucherFormComponent>) -> Html {
    let title = component
        .draft
        .client_representative_title
        .unwrap_or_default();
    let onchange = link.callback(|e: Event| {
        Msg::Edit(FieldEdit::RepresentativeTitle(
            e.target_unchecked_into::<HtmlSelectElement>().value(),
        ))
    });

    html! {
        <div class="field field-narrow">
            <label for="rep-title">{"Rep. Title"}</label>
            <select id="rep-title" {onchange}>
                <option value="Mr" selected={title == RepTitle::Mr}>{"Mr."}</option>
                <option value="Ms" selected={title == RepTitle::Ms}>{"Ms."}</option>
            </select>
        </div>
    }
}

fn logo_field(component: &VoucherFormComponent, link: &Scope<VoucherFormComponent>) -> Html {
    let onchange = link.callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        Msg::LogoPicked(input.files().and_then(|files| files.get(0)))
    });
    let logo = component.draft.logo_url.clone().unwrap_or_default();

    html! {
        <div class="field">
            <label for="logo-file">{"Upload Logo (Optional)"}</label>
            <input
                id="logo-file"
                type="file"
                accept="image/*"
                ref={component.logo_input_ref.clone()}
                {onchange}
            />
            if !logo.is_empty() {
                <div class="logo-preview">
                    <p>{"Logo Preview:"}</p>
                    <img src={logo} alt="Logo Preview" />
                    <button type="button" onclick={link.callback(|_| Msg::ClearLogo)}>
                        {"Clear Logo"}
                    </button>
                </div>
            }
            { error_hint(component, "logo_url") }
        </div>
    }
}

fn error_hint(component: &VoucherFormComponent, field_key: &'static str) -> Html {
    match component.error_for(field_key) {
        Some(message) => html! { <p class="field-error">{ message.to_string() }</p> },
        None => html! {},
    }
}
