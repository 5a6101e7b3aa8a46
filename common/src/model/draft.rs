//! An in-progress form state: every record field, optionally absent.
//!
//! The form edits a draft, not a record. Resolving a draft maps each absent
//! field to its type's empty value so the preview always receives a fully
//! concrete record, no matter which fields the user has touched so far.

use chrono::{DateTime, Utc};

use super::voucher::{RepTitle, VoucherRecord};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoucherDraft {
    pub recipient_name: Option<String>,
    pub amount: Option<String>,
    pub message: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub voucher_code: Option<String>,
    pub hotel_name: Option<String>,
    pub client_representative_title: Option<RepTitle>,
    pub client_representative_name: Option<String>,
    pub room_name: Option<String>,
    pub board_name: Option<String>,
    pub number_of_adults: Option<u32>,
    pub number_of_children: Option<u32>,
    pub issuer_name: Option<String>,
    pub issue_date: Option<DateTime<Utc>>,
    pub logo_url: Option<String>,
    pub hotel_address: Option<String>,
    pub hotel_phone_number: Option<String>,
    pub hotel_email: Option<String>,
    pub website_url: Option<String>,
}

impl VoucherDraft {
    /// Seeds a draft from an existing record, e.g. when the form resets to
    /// freshly committed defaults.
    pub fn from_record(record: &VoucherRecord) -> Self {
        Self {
            recipient_name: Some(record.recipient_name.clone()),
            amount: Some(record.amount.clone()),
            message: Some(record.message.clone()),
            expiration_date: record.expiration_date,
            voucher_code: Some(record.voucher_code.clone()),
            hotel_name: Some(record.hotel_name.clone()),
            client_representative_title: Some(record.client_representative_title),
            client_representative_name: Some(record.client_representative_name.clone()),
            room_name: Some(record.room_name.clone()),
            board_name: Some(record.board_name.clone()),
            number_of_adults: Some(record.number_of_adults),
            number_of_children: Some(record.number_of_children),
            issuer_name: Some(record.issuer_name.clone()),
            issue_date: record.issue_date,
            logo_url: Some(record.logo_url.clone()),
            hotel_address: Some(record.hotel_address.clone()),
            hotel_phone_number: Some(record.hotel_phone_number.clone()),
            hotel_email: Some(record.hotel_email.clone()),
            website_url: Some(record.website_url.clone()),
        }
    }

    /// Collapses the draft into a concrete record. Absent strings become
    /// empty, absent counts zero, absent dates null, an absent title `Mr`.
    pub fn resolve(&self) -> VoucherRecord {
        VoucherRecord {
            recipient_name: self.recipient_name.clone().unwrap_or_default(),
            amount: self.amount.clone().unwrap_or_default(),
            message: self.message.clone().unwrap_or_default(),
            expiration_date: self.expiration_date,
            voucher_code: self.voucher_code.clone().unwrap_or_default(),
            hotel_name: self.hotel_name.clone().unwrap_or_default(),
            client_representative_title: self.client_representative_title.unwrap_or_default(),
            client_representative_name: self
                .client_representative_name
                .clone()
                .unwrap_or_default(),
            room_name: self.room_name.clone().unwrap_or_default(),
            board_name: self.board_name.clone().unwrap_or_default(),
            number_of_adults: self.number_of_adults.unwrap_or(0),
            number_of_children: self.number_of_children.unwrap_or(0),
            issuer_name: self.issuer_name.clone().unwrap_or_default(),
            issue_date: self.issue_date,
            logo_url: self.logo_url.clone().unwrap_or_default(),
            hotel_address: self.hotel_address.clone().unwrap_or_default(),
            hotel_phone_number: self.hotel_phone_number.clone().unwrap_or_default(),
            hotel_email: self.hotel_email.clone().unwrap_or_default(),
            website_url: self.website_url.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_resolve_to_empty_values() {
        let resolved = VoucherDraft::default().resolve();
        assert_eq!(resolved.number_of_adults, 0);
        assert_eq!(resolved.recipient_name, "");
        assert_eq!(resolved.client_representative_title, RepTitle::Mr);
        assert!(resolved.issue_date.is_none());
        assert!(resolved.expiration_date.is_none());
    }

    #[test]
    fn from_record_round_trips() {
        let record = VoucherRecord {
            hotel_name: "The Grand Plaza".to_string(),
            number_of_adults: 2,
            ..VoucherRecord::default()
        };
        assert_eq!(VoucherDraft::from_record(&record).resolve(), record);
    }
}
