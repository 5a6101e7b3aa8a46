use std::collections::HashMap;

use yew::prelude::*;

use common::model::draft::VoucherDraft;
use common::model::voucher::{validation_messages, VoucherRecord};

/// State of the edit form: the draft under construction, the current
/// per-field validation messages, and a ref to the hidden logo file input so
/// it can be cleared alongside the field.
pub struct VoucherFormComponent {
    pub draft: VoucherDraft,
    pub errors: HashMap<&'static str, String>,
    pub logo_input_ref: NodeRef,
}

impl VoucherFormComponent {
    pub fn from_defaults(defaults: &VoucherRecord) -> Self {
        let mut component = Self {
            draft: VoucherDraft::from_record(defaults),
            errors: HashMap::new(),
            logo_input_ref: NodeRef::default(),
        };
        component.revalidate();
        component
    }

    /// Re-runs schema validation on the resolved draft. Validation is
    /// advisory: messages render inline, the preview keeps rendering.
    pub fn revalidate(&mut self) {
        self.errors = validation_messages(&self.draft.resolve());
    }

    pub fn error_for(&self, field: &'static str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}
