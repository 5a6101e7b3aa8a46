//! The defaults store: one localStorage key holding the user's preferred
//! baseline record. Read once at session start, written only on an explicit
//! "save as default". Any read or parse failure degrades to an empty record
//! and is logged, never surfaced; the initialization pass repairs the rest.

use gloo_console::error;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use common::model::voucher::VoucherRecord;

const STORAGE_KEY: &str = "voucherData";

pub fn load_defaults() -> VoucherRecord {
    match LocalStorage::get(STORAGE_KEY) {
        Ok(record) => record,
        Err(StorageError::KeyNotFound(_)) => VoucherRecord::default(),
        Err(err) => {
            error!(format!("failed to read stored defaults: {err}"));
            VoucherRecord::default()
        }
    }
}

pub fn save_defaults(record: &VoucherRecord) {
    if let Err(err) = LocalStorage::set(STORAGE_KEY, record) {
        error!(format!("failed to persist defaults: {err}"));
    }
}
