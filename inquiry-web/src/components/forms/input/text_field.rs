use inquiry::form::{FieldValue, FormState, MenuItem};
use leptos::*;

use super::{input_class, REQUIRED_MESSAGE};

const FIELD_CLASS: &str =
    "w-full flex-col items-start text-left mb-2 p-2 bg-white text-gray-800";

/// Single-line input, multi-line textarea or closed dropdown, bound to a
/// text value of the form state.
#[component]
pub fn TextFieldView(
    name: String,
    label: String,
    multiline: bool,
    min_rows: u32,
    select: Option<Vec<MenuItem>>,
    required: bool,
    autocomplete: String,
    form_state: RwSignal<FormState>,
    missing: RwSignal<Vec<String>>,
) -> impl IntoView {
    let value = {
        let name = name.clone();
        move || {
            form_state.with(|state| {
                state
                    .value(&name)
                    .and_then(FieldValue::as_text)
                    .unwrap_or_default()
                    .to_string()
            })
        }
    };
    let has_error = {
        let name = name.clone();
        move || missing.with(|missing| missing.contains(&name))
    };

    let input_view = match select {
        Some(items) => {
            let field_name = name.clone();
            view! {
                <select
                    id=name.clone()
                    name=name.clone()
                    required=required
                    autocomplete=autocomplete
                    prop:value=value
                    class={
                        let has_error = has_error.clone();
                        move || input_class(has_error())
                    }
                    on:change=move |ev| {
                        let selected = event_target_value(&ev);
                        form_state.update(|state| {
                            state.set_text(&field_name, selected)
                        });
                    }
                >
                    <option value="">""</option>
                    {items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <option value=item.value>{item.label}</option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_view()
        }
        None if multiline => {
            let field_name = name.clone();
            view! {
                <textarea
                    id=name.clone()
                    name=name.clone()
                    rows=min_rows
                    required=required
                    autocomplete=autocomplete
                    prop:value=value
                    class={
                        let has_error = has_error.clone();
                        move || input_class(has_error())
                    }
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form_state
                            .update(|state| state.set_text(&field_name, text));
                    }
                />
            }
            .into_view()
        }
        None => {
            let field_name = name.clone();
            view! {
                <input
                    type="text"
                    id=name.clone()
                    name=name.clone()
                    required=required
                    autocomplete=autocomplete
                    prop:value=value
                    class={
                        let has_error = has_error.clone();
                        move || input_class(has_error())
                    }
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form_state
                            .update(|state| state.set_text(&field_name, text));
                    }
                />
            }
            .into_view()
        }
    };

    view! {
        <div class=FIELD_CLASS>
            <label for=name class="text-base font-semibold text-gray-900">
                {label}
                {required
                    .then(|| view! { <span class="text-red-500">" *"</span> })}
            </label>
            {input_view}
            {move || has_error().then(|| view! {
                <div class="text-red-500">{REQUIRED_MESSAGE}</div>
            })}
        </div>
    }
}
