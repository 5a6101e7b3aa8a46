//! Fills in the identity fields of a stored voucher record at session start.
//!
//! Whatever the defaults store held (possibly nothing) comes through here
//! before it reaches the form or the preview: a missing voucher code is
//! generated, a missing issue date becomes "now", and a missing expiration
//! date is derived from the issue date. Records that already carry all three
//! pass through untouched, which makes the pass safe to run on every start.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::model::voucher::VoucherRecord;

/// Fixed prefix of every generated voucher code.
pub const CODE_PREFIX: &str = "VCHR-";

/// Length of the randomized suffix after the prefix.
pub const CODE_SUFFIX_LEN: usize = 8;

/// Days between issue and derived expiration.
pub const EXPIRATION_DAYS: i64 = 90;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a fresh voucher code: fixed prefix plus a randomized uppercase
/// alphanumeric suffix. No uniqueness guarantee; the space is large and the
/// tool is single-user, so collisions are accepted rather than mitigated.
pub fn generate_voucher_code() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..CODE_SUFFIX_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    format!("{CODE_PREFIX}{suffix}")
}

/// Produces a fully populated record from a possibly partial stored one.
///
/// - An empty or whitespace-only voucher code (never meaningfully set) is
///   replaced by a generated one.
/// - A null issue date becomes `now`.
/// - A null expiration date becomes issue date + 90 days. When the issue
///   date came from storage the derivation is based on that stored value,
///   not on `now`.
///
/// The output seeds both the form-default copy and the live copy.
pub fn initialize(stored: VoucherRecord, now: DateTime<Utc>) -> VoucherRecord {
    let mut record = stored;

    if record.voucher_code.trim().is_empty() {
        record.voucher_code = generate_voucher_code();
    }

    if record.issue_date.is_none() {
        record.issue_date = Some(now);
    }

    if record.expiration_date.is_none() {
        record.expiration_date = record.issue_date.map(|d| d + Duration::days(EXPIRATION_DAYS));
    }

    record
}

/// Normalizes a record the user explicitly committed as new defaults.
///
/// A null issue date becomes `now`; a null expiration date stays null.
/// Expiration is deliberately not derived here: first-load initialization
/// and an explicit save are different intents, and only the former invents
/// an expiration.
pub fn normalize_committed(mut record: VoucherRecord, now: DateTime<Utc>) -> VoucherRecord {
    if record.issue_date.is_none() {
        record.issue_date = Some(now);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn generated_code_matches_pattern() {
        let code = generate_voucher_code();
        let suffix = code.strip_prefix(CODE_PREFIX).expect("prefix");
        assert_eq!(suffix.len(), CODE_SUFFIX_LEN);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn empty_store_gets_code_and_both_dates() {
        let now = at(2024, 6, 1);
        let record = initialize(VoucherRecord::default(), now);
        assert!(record.voucher_code.starts_with(CODE_PREFIX));
        assert_eq!(record.issue_date, Some(now));
        assert_eq!(record.expiration_date, Some(now + Duration::days(90)));
        assert_eq!(record.number_of_adults, 0);
    }

    #[test]
    fn whitespace_code_counts_as_never_set() {
        let stored = VoucherRecord {
            voucher_code: "   ".to_string(),
            ..VoucherRecord::default()
        };
        let record = initialize(stored, at(2024, 6, 1));
        assert!(record.voucher_code.starts_with(CODE_PREFIX));
    }

    #[test]
    fn expiration_derives_from_stored_issue_date_not_now() {
        let stored = VoucherRecord {
            issue_date: Some(at(2024, 1, 1)),
            ..VoucherRecord::default()
        };
        let record = initialize(stored, at(2024, 6, 1));
        assert_eq!(record.issue_date, Some(at(2024, 1, 1)));
        assert_eq!(record.expiration_date, Some(at(2024, 3, 31)));
    }

    #[test]
    fn complete_records_pass_through_unchanged() {
        let stored = VoucherRecord {
            voucher_code: "HOTELSTAY24".to_string(),
            issue_date: Some(at(2024, 2, 10)),
            expiration_date: Some(at(2024, 4, 1)),
            ..VoucherRecord::default()
        };
        let record = initialize(stored.clone(), at(2024, 6, 1));
        assert_eq!(record, stored);
    }

    #[test]
    fn initialize_is_idempotent_on_its_own_output() {
        let first = initialize(VoucherRecord::default(), at(2024, 6, 1));
        let second = initialize(first.clone(), at(2025, 1, 1));
        assert_eq!(second, first);
    }

    #[test]
    fn commit_fills_issue_date_but_never_derives_expiration() {
        let now = at(2024, 6, 1);
        let record = normalize_committed(VoucherRecord::default(), now);
        assert_eq!(record.issue_date, Some(now));
        assert!(record.expiration_date.is_none());
    }

    #[test]
    fn commit_keeps_existing_dates() {
        let committed = VoucherRecord {
            issue_date: Some(at(2024, 3, 3)),
            expiration_date: Some(at(2024, 9, 9)),
            ..VoucherRecord::default()
        };
        let record = normalize_committed(committed.clone(), at(2024, 6, 1));
        assert_eq!(record, committed);
    }
}
