mod checkbox_group;
mod field_view;
mod radio_group;
mod text_field;

pub use checkbox_group::CheckboxGroupView;
pub use field_view::FieldView;
pub use radio_group::RadioGroupView;
pub use text_field::TextFieldView;

const REQUIRED_MESSAGE: &str = "This field is required";

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "bg-gray-50 border border-red-500 text-gray-900 rounded-lg \
         focus:ring-red-500 focus:border-red-500 block w-full p-2.5"
    } else {
        "bg-gray-50 border border-gray-300 text-gray-900 rounded-lg \
         focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
    }
}
