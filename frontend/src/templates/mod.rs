//! The visual templates. Each submodule exposes a single
//! `render(&VoucherRecord, &str) -> Html` function; the second argument is
//! the element id the print stylesheet targets.

use chrono::{DateTime, Utc};

use common::model::voucher::VoucherRecord;

pub mod default;
pub mod elegant;
pub mod modern;

pub(crate) fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Amount as a two-decimal string; anything unparseable shows as 0.00.
pub(crate) fn format_amount(record: &VoucherRecord) -> String {
    format!("{:.2}", record.amount_value().unwrap_or(0.0))
}

pub(crate) fn has_monetary_value(record: &VoucherRecord) -> bool {
    record.amount_value().unwrap_or(0.0) > 0.0
}

pub(crate) fn occupancy(record: &VoucherRecord) -> String {
    let mut text = format!("{} Adult(s)", record.number_of_adults);
    if record.number_of_children > 0 {
        text.push_str(&format!(", {} Child(ren)", record.number_of_children));
    }
    text
}

/// Website address without its scheme, as shown on the voucher.
pub(crate) fn display_url(url: &str) -> &str {
    url.trim_start_matches("https://").trim_start_matches("http://")
}

pub(crate) fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_render_in_long_form() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(Some(date)), "Jan 5, 2024");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn amount_formatting_tolerates_garbage() {
        let mut record = VoucherRecord {
            amount: "50".to_string(),
            ..VoucherRecord::default()
        };
        assert_eq!(format_amount(&record), "50.00");
        assert!(has_monetary_value(&record));

        record.amount = "not a number".to_string();
        assert_eq!(format_amount(&record), "0.00");
        assert!(!has_monetary_value(&record));
    }

    #[test]
    fn occupancy_omits_zero_children() {
        let mut record = VoucherRecord {
            number_of_adults: 2,
            ..VoucherRecord::default()
        };
        assert_eq!(occupancy(&record), "2 Adult(s)");
        record.number_of_children = 1;
        assert_eq!(occupancy(&record), "2 Adult(s), 1 Child(ren)");
    }

    #[test]
    fn display_url_strips_scheme() {
        assert_eq!(display_url("https://example.com"), "example.com");
        assert_eq!(display_url("example.com"), "example.com");
    }
}
