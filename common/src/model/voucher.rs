//! The voucher record: every field a single hotel stay voucher carries.
//!
//! A record is stored as camelCase JSON with RFC 3339 date strings. Storage
//! is written by older builds and by hand-edited browsers, so deserialization
//! is lenient per field: a missing or structurally wrong field falls back to
//! that field's empty value instead of failing the whole record. Dates that
//! do not parse become `None` and are re-derived by the reconciler.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Salutation used for the client representative on the voucher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepTitle {
    #[default]
    Mr,
    Ms,
}

impl RepTitle {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepTitle::Mr => "Mr",
            RepTitle::Ms => "Ms",
        }
    }
}

impl fmt::Display for RepTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full set of fields describing one voucher instance.
///
/// All fields are concrete at rest: strings default to empty, counts to zero,
/// dates to `None`. The validation attributes mirror what the form surfaces
/// inline; a failing field never blocks the preview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct VoucherRecord {
    #[validate(length(min = 1, message = "Recipient name is required"))]
    #[serde(deserialize_with = "lenient::string")]
    pub recipient_name: String,

    #[validate(custom(
        function = validate_amount,
        message = "Amount must be a non-negative number"
    ))]
    #[serde(deserialize_with = "lenient::string")]
    pub amount: String,

    #[validate(length(max = 300, message = "Message can be up to 300 characters"))]
    #[serde(deserialize_with = "lenient::string")]
    pub message: String,

    #[serde(deserialize_with = "lenient::date")]
    pub expiration_date: Option<DateTime<Utc>>,

    #[validate(length(min = 1, message = "Voucher code is required"))]
    #[serde(deserialize_with = "lenient::string")]
    pub voucher_code: String,

    #[validate(length(min = 1, message = "Hotel name is required"))]
    #[serde(deserialize_with = "lenient::string")]
    pub hotel_name: String,

    #[serde(deserialize_with = "lenient::title")]
    pub client_representative_title: RepTitle,

    #[validate(length(min = 1, message = "Client representative name is required"))]
    #[serde(deserialize_with = "lenient::string")]
    pub client_representative_name: String,

    #[validate(length(min = 1, message = "Room name is required"))]
    #[serde(deserialize_with = "lenient::string")]
    pub room_name: String,

    #[validate(length(min = 1, message = "Board name is required"))]
    #[serde(deserialize_with = "lenient::string")]
    pub board_name: String,

    #[serde(deserialize_with = "lenient::count")]
    pub number_of_adults: u32,

    #[serde(deserialize_with = "lenient::count")]
    pub number_of_children: u32,

    #[validate(length(min = 1, message = "Issuer name is required"))]
    #[serde(deserialize_with = "lenient::string")]
    pub issuer_name: String,

    #[serde(deserialize_with = "lenient::date")]
    pub issue_date: Option<DateTime<Utc>>,

    #[validate(custom(
        function = validate_logo_url,
        message = "Logo must be an image URL or an uploaded image"
    ))]
    #[serde(deserialize_with = "lenient::string")]
    pub logo_url: String,

    #[validate(length(min = 1, message = "Hotel address is required"))]
    #[serde(deserialize_with = "lenient::string")]
    pub hotel_address: String,

    #[validate(length(min = 1, message = "Hotel phone number is required"))]
    #[serde(deserialize_with = "lenient::string")]
    pub hotel_phone_number: String,

    #[validate(
        length(min = 1, message = "Hotel email is required"),
        email(message = "Invalid email address")
    )]
    #[serde(deserialize_with = "lenient::string")]
    pub hotel_email: String,

    #[validate(custom(
        function = validate_optional_url,
        message = "Please enter a valid URL for the website"
    ))]
    #[serde(deserialize_with = "lenient::string")]
    pub website_url: String,
}

impl VoucherRecord {
    /// Amount parsed as a number, if it parses at all.
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.trim().parse::<f64>().ok()
    }
}

fn validate_amount(value: &str) -> Result<(), ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n >= 0.0 => Ok(()),
        _ => Err(ValidationError::new("amount")),
    }
}

fn validate_logo_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.starts_with("data:image") || is_url(value) {
        Ok(())
    } else {
        Err(ValidationError::new("logo_url"))
    }
}

fn validate_optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_url(value) {
        Ok(())
    } else {
        Err(ValidationError::new("website_url"))
    }
}

fn is_url(value: &str) -> bool {
    use validator::ValidateUrl;
    value.validate_url()
}

/// Runs validation and flattens the result to one message per failing field,
/// keyed by the record's field name. An empty map means the record is valid.
pub fn validation_messages(record: &VoucherRecord) -> HashMap<&'static str, String> {
    let Err(errors) = record.validate() else {
        return HashMap::new();
    };
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            let std::borrow::Cow::Borrowed(field) = field else {
                return None;
            };
            field_errors.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string());
                (field, message)
            })
        })
        .collect()
}

mod lenient {
    //! Field-level fallbacks for permissively reading stored records.

    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::RepTitle;

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        })
    }

    pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n
                .as_f64()
                .filter(|v| *v >= 0.0)
                .map(|v| v as u32)
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        })
    }

    pub fn date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => parse_date(&s),
            _ => None,
        })
    }

    pub fn title<'de, D>(deserializer: D) -> Result<RepTitle, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) if s == "Ms" => RepTitle::Ms,
            _ => RepTitle::Mr,
        })
    }

    /// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
    pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
            return Some(dt.with_timezone(&Utc));
        }
        raw.trim()
            .parse::<NaiveDate>()
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

pub use lenient::parse_date;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_json_object_yields_empty_record() {
        let record: VoucherRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, VoucherRecord::default());
        assert_eq!(record.number_of_adults, 0);
        assert_eq!(record.client_representative_title, RepTitle::Mr);
        assert!(record.issue_date.is_none());
    }

    #[test]
    fn dates_round_trip_as_iso_strings() {
        let record = VoucherRecord {
            issue_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()),
            ..VoucherRecord::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("2024-01-01T09:30:00Z"));
        let back: VoucherRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.issue_date, record.issue_date);
    }

    #[test]
    fn unparseable_date_becomes_null() {
        let record: VoucherRecord =
            serde_json::from_str(r#"{"issueDate":"not a date","expirationDate":12}"#).unwrap();
        assert!(record.issue_date.is_none());
        assert!(record.expiration_date.is_none());
    }

    #[test]
    fn bare_calendar_date_is_accepted() {
        let record: VoucherRecord = serde_json::from_str(r#"{"issueDate":"2024-01-01"}"#).unwrap();
        assert_eq!(
            record.issue_date,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn malformed_fields_fall_back_instead_of_failing() {
        let record: VoucherRecord = serde_json::from_str(
            r#"{"numberOfAdults":-3,"numberOfChildren":"2","clientRepresentativeTitle":"Dr","hotelName":42}"#,
        )
        .unwrap();
        assert_eq!(record.number_of_adults, 0);
        assert_eq!(record.number_of_children, 2);
        assert_eq!(record.client_representative_title, RepTitle::Mr);
        assert_eq!(record.hotel_name, "42");
    }

    #[test]
    fn negative_amount_fails_validation() {
        let record = VoucherRecord {
            amount: "-5".to_string(),
            ..VoucherRecord::default()
        };
        let messages = validation_messages(&record);
        assert_eq!(
            messages.get("amount").map(String::as_str),
            Some("Amount must be a non-negative number")
        );
    }

    #[test]
    fn data_uri_logo_is_valid() {
        let record = VoucherRecord {
            amount: "0".to_string(),
            logo_url: "data:image/png;base64,AAAA".to_string(),
            ..VoucherRecord::default()
        };
        assert!(!validation_messages(&record).contains_key("logo_url"));
    }

    #[test]
    fn message_over_limit_is_reported() {
        let record = VoucherRecord {
            message: "x".repeat(301),
            ..VoucherRecord::default()
        };
        assert!(validation_messages(&record).contains_key("message"));
    }
}
