//! The friendly default layout: contact block in the header, a two-column
//! detail grid, and a value banner when the voucher carries an amount.

use yew::prelude::*;

use common::model::voucher::VoucherRecord;

use super::{display_url, format_amount, format_date, has_monetary_value, occupancy, or_fallback};

pub fn render(data: &VoucherRecord, target_id: &str) -> Html {
    html! {
        <div id={target_id.to_string()} class="voucher voucher-default">
            <header class="voucher-header">
                <div class="voucher-identity">
                    {
                        if data.logo_url.is_empty() {
                            html! { <div class="logo-placeholder">{"🏨"}</div> }
                        } else {
                            html! { <img class="voucher-logo" src={data.logo_url.clone()} alt="Hotel logo" /> }
                        }
                    }
                    <h2>{ or_fallback(&data.hotel_name, "Hotel Voucher") }</h2>
                    <p class="voucher-subtitle">{"Accommodation Voucher"}</p>
                </div>
                <div class="voucher-contact">
                    if !data.hotel_address.is_empty() {
                        <p>{ &data.hotel_address }</p>
                    }
                    if !data.hotel_phone_number.is_empty() {
                        <p>{ &data.hotel_phone_number }</p>
                    }
                    if !data.hotel_email.is_empty() {
                        <p>{ &data.hotel_email }</p>
                    }
                    if !data.website_url.is_empty() {
                        <p><a href={data.website_url.clone()} target="_blank" rel="noopener noreferrer">
                            { display_url(&data.website_url) }
                        </a></p>
                    }
                </div>
            </header>

            <div class="voucher-body">
                <div class="detail-grid">
                    { detail("Guest Name", or_fallback(&data.recipient_name, "Valued Guest")) }
                    { detail(
                        "Client Representative",
                        &format!(
                            "{}. {}",
                            data.client_representative_title,
                            or_fallback(&data.client_representative_name, "N/A"),
                        ),
                    ) }
                    { detail("Accommodation", or_fallback(&data.room_name, "N/A")) }
                    { detail("Board / Package", or_fallback(&data.board_name, "N/A")) }
                    { detail("Occupancy", &occupancy(data)) }
                </div>

                if has_monetary_value(data) {
                    <div class="value-banner">
                        <span class="value-label">{"Voucher Value"}</span>
                        <span class="value-amount">{ format!("${}", format_amount(data)) }</span>
                    </div>
                }

                if !data.message.is_empty() {
                    <div class="voucher-message">
                        <span class="detail-label">{"Message / Conditions"}</span>
                        <p>{ &data.message }</p>
                    </div>
                }
            </div>

            <footer class="voucher-footer">
                <div class="detail-grid">
                    { detail("Issue Date", &format_date(data.issue_date)) }
                    { detail("Expires", &format_date(data.expiration_date)) }
                    { detail("Voucher Code", or_fallback(&data.voucher_code, "N/A")) }
                    { detail("Issued By", or_fallback(&data.issuer_name, "N/A")) }
                </div>
            </footer>
        </div>
    }
}

fn detail(label: &str, value: &str) -> Html {
    html! {
        <div class="detail">
            <span class="detail-label">{ label.to_string() }</span>
            <span class="detail-value">{ value.to_string() }</span>
        </div>
    }
}
