pub mod draft;
pub mod template;
pub mod voucher;
