mod layout;
mod state;
mod values;
mod widget;

pub use layout::FormLayout;
pub use state::{FormState, ValidationErrors};
pub use values::{FieldValue, FormValues};
pub use widget::{dispatch, Choice, MenuItem, Widget};
