use inquiry::form::{Choice, FormState};
use leptos::*;

/// Independent choices bound to a list value; each box adds or removes
/// its key.
#[component]
pub fn CheckboxGroupView(
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
                    let is_checked = {
                        let name = name.clone();
                        let key = key.clone();
                        move || {
                            form_state
                                .with(|state| state.is_checked(&name, &key))
                        }
                    };
                    view! {
                        <label class="flex items-center mr-4">
                            <input
                                type="checkbox"
                                class="mr-1"
                                value=key.clone()
                                prop:checked=is_checked
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form_state.update(|state| {
                                        state.toggle(&field_name, &key, checked)
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
