mod redirect;

pub mod buttons;
pub mod forms;
pub mod notifications;

pub use redirect::redirect_to;
