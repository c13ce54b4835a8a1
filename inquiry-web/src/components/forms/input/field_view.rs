use inquiry::form::{FormState, Widget};
use leptos::*;
use log::debug;

use super::{CheckboxGroupView, RadioGroupView, TextFieldView};

#[component]
pub fn FieldView(
    widget: Widget,
    form_state: RwSignal<FormState>,
    missing: RwSignal<Vec<String>>,
) -> impl IntoView {
    match widget {
        Widget::TextField {
            name,
            label,
            multiline,
            min_rows,
            select,
            required,
            autocomplete,
        } => view! {
            <TextFieldView
                name
                label
                multiline
                min_rows
                select
                required
                autocomplete
                form_state
                missing
            />
        }
        .into_view(),
        Widget::RadioGroup {
            name,
            label,
            choices,
            ..
        } => view! {
            <RadioGroupView name label choices form_state />
        }
        .into_view(),
        Widget::CheckboxGroup {
            name,
            label,
            choices,
            ..
        } => view! {
            <CheckboxGroupView name label choices form_state />
        }
        .into_view(),
        Widget::Unsupported { name, code } => {
            debug!("Field {} has unsupported type {}", name, code);
            ().into_view()
        }
    }
}
