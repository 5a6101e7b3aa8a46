//! The gold, serif layout: centered ceremonial header, "Presented To" block,
//! and a footer strip with the dates and code.

use yew::prelude::*;

use common::model::voucher::VoucherRecord;

use super::{display_url, format_amount, format_date, has_monetary_value, occupancy, or_fallback};

pub fn render(data: &VoucherRecord, target_id: &str) -> Html {
    html! {
        <div id={target_id.to_string()} class="voucher voucher-elegant">
            <header class="voucher-header">
                {
                    if data.logo_url.is_empty() {
                        html! { <div class="logo-placeholder">{"🏛"}</div> }
                    } else {
                        html! { <img class="voucher-logo" src={data.logo_url.clone()} alt="Hotel logo" /> }
                    }
                }
                <h2>{ or_fallback(&data.hotel_name, "Luxury Stay Voucher") }</h2>
                <p class="voucher-subtitle">{"An Exclusive Invitation"}</p>
            </header>

            <div class="voucher-body">
                <div class="presented-to">
                    <p class="detail-label">{"Presented To"}</p>
                    <p class="recipient-name">{ or_fallback(&data.recipient_name, "Our Esteemed Guest") }</p>
                </div>

                <hr class="gold-rule" />

                <div class="detail-grid">
                    { labeled(
                        "Client Representative",
                        &format!(
                            "{}. {}",
                            data.client_representative_title,
                            or_fallback(&data.client_representative_name, "N/A"),
                        ),
                    ) }
                    { labeled("Accommodation", or_fallback(&data.room_name, "N/A")) }
                    { labeled("Package / Board", or_fallback(&data.board_name, "N/A")) }
                    { labeled("Guests", &occupancy(data)) }
                </div>

                if has_monetary_value(data) {
                    <div class="value-banner">
                        <p class="detail-label">{"Accompanied by a credit of"}</p>
                        <p class="value-amount">{ format!("${}", format_amount(data)) }</p>
                    </div>
                }

                if !data.message.is_empty() {
                    <p class="voucher-message elegant-message">{ &data.message }</p>
                }

                if !data.hotel_address.is_empty() || !data.hotel_phone_number.is_empty()
                    || !data.hotel_email.is_empty() || !data.website_url.is_empty() {
                    <div class="voucher-contact">
                        if !data.hotel_address.is_empty() {
                            <span>{ &data.hotel_address }</span>
                        }
                        if !data.hotel_phone_number.is_empty() {
                            <span>{ &data.hotel_phone_number }</span>
                        }
                        if !data.hotel_email.is_empty() {
                            <span>{ &data.hotel_email }</span>
                        }
                        if !data.website_url.is_empty() {
                            <span>{ display_url(&data.website_url) }</span>
                        }
                    </div>
                }
            </div>

            <footer class="voucher-footer">
                { labeled("Issued", &format_date(data.issue_date)) }
                { labeled("Valid Until", &format_date(data.expiration_date)) }
                { labeled("Code", or_fallback(&data.voucher_code, "N/A")) }
                { labeled("By", or_fallback(&data.issuer_name, "N/A")) }
            </footer>
        </div>
    }
}

fn labeled(label: &str, value: &str) -> Html {
    html! {
        <div class="detail">
            <span class="detail-label">{ label.to_string() }</span>
            <span class="detail-value">{ value.to_string() }</span>
        </div>
    }
}
