mod button_type;
mod form_button;

pub use button_type::ButtonType;
pub use form_button::FormButton;
