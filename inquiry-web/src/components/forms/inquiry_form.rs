use inquiry::form::{FormLayout, FormState, FormValues};
use leptos::ev::SubmitEvent;
use leptos::*;
use log::debug;

use super::input::FieldView;
use super::FormError;
use crate::components::buttons::{ButtonType, FormButton};

/// The rendered inquiry form. Submission is blocked until every required
/// field holds a value; valid values are handed to `on_submit`.
#[component]
pub fn InquiryFormView(
    layout: FormLayout,
    form_state: RwSignal<FormState>,
    is_submitting: Signal<bool>,
    on_submit: Box<dyn Fn(FormValues)>,
) -> impl IntoView {
    let missing = create_rw_signal(Vec::<String>::new());
    let widgets = layout.widgets().to_vec();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        match form_state.with_untracked(FormState::validate) {
            Ok(values) => {
                missing.set(Vec::new());
                on_submit(values);
            }
            Err(errors) => {
                debug!("{}", FormError::from(errors.clone()));
                missing.set(errors.missing().to_vec());
            }
        }
    };

    let submit_button = FormButton::new(ButtonType::Submit, None);

    view! {
        <form
            class="flex flex-col w-full max-w-2xl space-y-2"
            on:submit=handle_submit
        >
            {widgets
                .into_iter()
                .map(|widget| {
                    let field_name = widget.name().to_string();
                    view! {
                        <div data-field=field_name>
                            <FieldView widget form_state missing />
                        </div>
                    }
                })
                .collect_view()}
            <div>
                {submit_button.into_view(is_submitting)}
            </div>
        </form>
    }
}
