use yew::prelude::*;

use common::model::draft::VoucherDraft;
use common::model::voucher::VoucherRecord;

#[derive(Properties, PartialEq, Clone)]
pub struct VoucherFormProps {
    /// The record the form starts from and resets to on a commit.
    pub defaults: VoucherRecord,

    /// Fired on every field edit with the current draft.
    pub on_form_change: Callback<VoucherDraft>,

    /// Fired when the user saves the current values as their defaults.
    pub on_save_defaults: Callback<VoucherRecord>,
}
