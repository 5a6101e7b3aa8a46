pub mod print_button;
pub mod template_selector;
pub mod voucher_form;
pub mod voucher_preview;
