//! Static registry mapping template ids to their renderers.

use yew::Html;

use common::model::template::TemplateId;
use common::model::voucher::VoucherRecord;

use crate::templates;

/// Element id carried by the rendered voucher root. The print stylesheet
/// targets it, so every renderer must attach it verbatim.
pub const PREVIEW_ELEMENT_ID: &str = "voucher-preview-area";

pub struct TemplateEntry {
    pub id: TemplateId,
    pub name: &'static str,
    pub preview_image_url: &'static str,
    pub render: fn(&VoucherRecord, &str) -> Html,
}

pub const ALL_TEMPLATES: &[TemplateEntry] = &[
    TemplateEntry {
        id: TemplateId::Default,
        name: "Default Friendly",
        preview_image_url: "https://picsum.photos/seed/defaultVoucher/150/100",
        render: templates::default::render,
    },
    TemplateEntry {
        id: TemplateId::Elegant,
        name: "Elegant Gold",
        preview_image_url: "https://picsum.photos/seed/elegantVoucher/150/100",
        render: templates::elegant::render,
    },
    TemplateEntry {
        id: TemplateId::Modern,
        name: "Modern Minimal",
        preview_image_url: "https://picsum.photos/seed/modernVoucher/150/100",
        render: templates::modern::render,
    },
];

pub fn template_by_id(id: TemplateId) -> Option<&'static TemplateEntry> {
    ALL_TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_has_a_registered_renderer() {
        for id in TemplateId::ALL {
            assert!(template_by_id(id).is_some(), "missing renderer for {id}");
        }
    }

    #[test]
    fn registry_order_is_stable() {
        let ids: Vec<TemplateId> = ALL_TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![TemplateId::Default, TemplateId::Elegant, TemplateId::Modern]
        );
    }
}
