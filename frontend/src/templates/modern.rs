//! The minimal layout: dark header, boxed sections per topic, and a compact
//! footer row for the dates, code, and issuer.

use yew::prelude::*;

use common::model::voucher::VoucherRecord;

use super::{display_url, format_amount, format_date, has_monetary_value, occupancy, or_fallback};

pub fn render(data: &VoucherRecord, target_id: &str) -> Html {
    html! {
        <div id={target_id.to_string()} class="voucher voucher-modern">
            <header class="voucher-header">
                <div>
                    {
                        if data.logo_url.is_empty() {
                            html! { <div class="logo-placeholder">{"▦"}</div> }
                        } else {
                            html! { <img class="voucher-logo" src={data.logo_url.clone()} alt="Hotel logo" /> }
                        }
                    }
                    <h3>{ or_fallback(&data.hotel_name, "STAY VOUCHER") }</h3>
                    <p class="voucher-subtitle">{"CONFIRMATION VOUCHER"}</p>
                </div>
            </header>

            <div class="voucher-body">
                <section>
                    <p class="section-label">{"Guest Information"}</p>
                    <div class="section-box">
                        { row("Guest Name", or_fallback(&data.recipient_name, "Valued Individual")) }
                        { row(
                            "Client Representative",
                            &format!(
                                "{}. {}",
                                data.client_representative_title,
                                or_fallback(&data.client_representative_name, "N/A"),
                            ),
                        ) }
                    </div>
                </section>

                <section>
                    <p class="section-label">{"Stay Details"}</p>
                    <div class="section-box">
                        { row("Room", or_fallback(&data.room_name, "N/A")) }
                        { row("Board / Package", or_fallback(&data.board_name, "N/A")) }
                        { row("Occupancy", &occupancy(data)) }
                    </div>
                </section>

                if has_monetary_value(data) {
                    <section>
                        <p class="section-label">{"Credit / Value"}</p>
                        <div class="section-box value-banner">
                            <p class="value-amount">{ format!("${}", format_amount(data)) }</p>
                        </div>
                    </section>
                }

                if !data.message.is_empty() {
                    <section>
                        <p class="section-label">{"Message / Conditions"}</p>
                        <div class="section-box">
                            <p class="voucher-message">{ &data.message }</p>
                        </div>
                    </section>
                }
            </div>

            <footer class="voucher-footer">
                <div class="footer-row">
                    { row("Issued", &format_date(data.issue_date)) }
                    { row("Expires", &format_date(data.expiration_date)) }
                    { row("Code", or_fallback(&data.voucher_code, "N/A")) }
                    { row("By", or_fallback(&data.issuer_name, "N/A")) }
                </div>
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
            </footer>
        </div>
    }
}

fn row(label: &str, value: &str) -> Html {
    html! {
        <div class="row-item">
            <span class="detail-label">{ label.to_string() }</span>
            <span class="detail-value">{ value.to_string() }</span>
        </div>
    }
}
