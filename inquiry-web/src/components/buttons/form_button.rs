use leptos::*;

use super::button_type::ButtonType;

#[derive(Clone)]
pub struct FormButton {
    button_type: ButtonType,
    text: Option<String>,
}

impl FormButton {
    pub fn new(button_type: ButtonType, text: Option<&str>) -> Self {
        Self {
            button_type,
            text: text.map(|s| s.to_string()),
        }
    }

    pub fn text(&self) -> String {
        self.text
            .clone()
            .unwrap_or_else(|| self.button_type.button_text().to_string())
    }

    /// Submit button that greys out while `disabled` holds.
    pub fn into_view(self, disabled: Signal<bool>) -> View {
        let text = self.text();
        let button_type = self.button_type;
        view! {
            <button
                type="submit"
                class=move || button_type.button_class(disabled.get())
                disabled=move || disabled.get()
            >
                {text}
            </button>
        }
        .into_view()
    }
}
