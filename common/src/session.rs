//! Tracks the two in-memory copies of the voucher while the user edits.
//!
//! The form-default copy is what the form resets to; the live copy is what
//! the preview renders and absorbs every keystroke. Committing new defaults
//! replaces both copies at once: an explicit commit is understood as "reset
//! the form to these values", so uncommitted edits are discarded, never
//! merged.

use chrono::{DateTime, Utc};

use crate::model::draft::VoucherDraft;
use crate::model::voucher::VoucherRecord;
use crate::reconcile;

#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    form_defaults: VoucherRecord,
    live: VoucherRecord,
}

impl EditSession {
    /// Starts a session from whatever the defaults store held. The stored
    /// record runs through the initialization pass and seeds both copies
    /// identically.
    pub fn start(stored: VoucherRecord, now: DateTime<Utc>) -> Self {
        let initialized = reconcile::initialize(stored, now);
        Self {
            form_defaults: initialized.clone(),
            live: initialized,
        }
    }

    /// The record the preview renders.
    pub fn live(&self) -> &VoucherRecord {
        &self.live
    }

    /// The record the form resets to.
    pub fn form_defaults(&self) -> &VoucherRecord {
        &self.form_defaults
    }

    /// Replaces the live copy with the resolved draft. Every field of the
    /// result is concrete; absent draft fields land as empty values.
    pub fn on_field_change(&mut self, draft: &VoucherDraft) {
        self.live = draft.resolve();
    }

    /// Applies an explicit "save as default": the committed record is
    /// normalized (null issue date becomes `now`, expiration untouched) and
    /// then replaces both copies, superseding any uncommitted live edits.
    pub fn on_defaults_committed(&mut self, committed: VoucherRecord, now: DateTime<Utc>) {
        let normalized = reconcile::normalize_committed(committed, now);
        self.form_defaults = normalized.clone();
        self.live = normalized;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn start_seeds_both_copies_identically() {
        let session = EditSession::start(VoucherRecord::default(), at(2024, 6, 1));
        assert_eq!(session.live(), session.form_defaults());
        assert!(!session.live().voucher_code.is_empty());
    }

    #[test]
    fn field_change_touches_only_the_live_copy() {
        let mut session = EditSession::start(VoucherRecord::default(), at(2024, 6, 1));
        let defaults_before = session.form_defaults().clone();

        let mut draft = VoucherDraft::from_record(session.live());
        draft.recipient_name = Some("Jane Doe".to_string());
        session.on_field_change(&draft);

        assert_eq!(session.live().recipient_name, "Jane Doe");
        assert_eq!(session.form_defaults(), &defaults_before);
    }

    #[test]
    fn absent_draft_count_normalizes_to_zero() {
        let mut session = EditSession::start(VoucherRecord::default(), at(2024, 6, 1));
        let mut draft = VoucherDraft::from_record(session.live());
        draft.number_of_adults = None;
        session.on_field_change(&draft);
        assert_eq!(session.live().number_of_adults, 0);
    }

    #[test]
    fn commit_supersedes_uncommitted_edits() {
        let now = at(2024, 6, 1);
        let mut session = EditSession::start(VoucherRecord::default(), now);

        let mut draft = VoucherDraft::from_record(session.live());
        draft.hotel_name = Some("Scratch Edit Inn".to_string());
        session.on_field_change(&draft);

        let committed = VoucherRecord {
            hotel_name: "The Grand Plaza".to_string(),
            issue_date: Some(at(2024, 2, 2)),
            ..VoucherRecord::default()
        };
        session.on_defaults_committed(committed.clone(), now);

        assert_eq!(session.live(), &committed);
        assert_eq!(session.form_defaults(), &committed);
    }

    #[test]
    fn commit_round_trip_normalizes_null_issue_date_only() {
        let now = at(2024, 6, 1);
        let mut session = EditSession::start(VoucherRecord::default(), now);

        let committed = VoucherRecord::default();
        session.on_defaults_committed(committed, now);

        assert_eq!(session.live().issue_date, Some(now));
        assert!(session.live().expiration_date.is_none());
    }
}
