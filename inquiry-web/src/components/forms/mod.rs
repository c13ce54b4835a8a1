mod form_error;
mod inquiry_form;

pub mod input;

pub use form_error::FormError;
pub use inquiry_form::InquiryFormView;
