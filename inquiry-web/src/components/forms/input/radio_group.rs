use inquiry::form::{Choice, FieldValue, FormState};
use leptos::*;

#[component]
pub fn RadioGroupView(
    name: String,
    label: String,
    choices: Vec<Choice>,
    form_state: RwSignal<FormState>,
) -> impl IntoView {
    view! {
        <fieldset class="w-full text-left mb-2 p-2 bg-white text-gray-800">
            <legend class="text-base font-semibold text-gray-900">
                {label}
            </legend>
            {choices
                .into_iter()
                .map(|choice| {
                    let key = choice.value.clone();
                    let field_name = name.clone();
                    let is_selected = {
                        let name = name.clone();
                        let key = key.clone();
                        move || {
                            form_state.with(|state| {
                                state.value(&name).and_then(FieldValue::as_text)
                                    == Some(key.as_str())
                            })
                        }
                    };
                    view! {
                        <label class="flex items-center mr-4">
                            <input
                                type="radio"
                                class="mr-1"
                                name=name.clone()
                                value=key.clone()
                                prop:checked=is_selected
                                on:change=move |_| {
                                    form_state.update(|state| {
                                        state.select(&field_name, key.clone())
                                    });
                                }
                            />
                            {choice.label}
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}
