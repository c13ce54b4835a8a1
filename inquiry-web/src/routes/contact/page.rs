use std::cell::Cell;
use std::rc::Rc;

use inquiry::form::{FormLayout, FormState, FormValues};
use inquiry::http::{DefaultTransport, HttpTransport};
use inquiry::schema::FormSchema;
use inquiry::{InquiryClient, LoadGate};
use leptos::*;
use log::{debug, error};

use crate::auth::use_require_auth;
use crate::components::forms::{FormError, InquiryFormView};
use crate::GlobalState;

/// Flag that turns false when the calling component is cleaned up.
pub(crate) fn mount_flag() -> Rc<Cell<bool>> {
    let is_mounted = Rc::new(Cell::new(true));
    on_cleanup({
        let is_mounted = Rc::clone(&is_mounted);
        move || is_mounted.set(false)
    });
    is_mounted
}

/// Fetches the schema in the background. A schema arriving after the page
/// is gone is dropped.
pub(crate) fn spawn_schema_load<T>(
    client: InquiryClient<T>,
    schema: RwSignal<Option<FormSchema>>,
    is_mounted: Rc<Cell<bool>>,
) where
    T: HttpTransport + 'static,
{
    spawn_local(async move {
        match client.load_schema().await {
            Ok(loaded) if is_mounted.get() => schema.set(Some(loaded)),
            Ok(_) => debug!("Inquiry form loaded after page closed"),
            Err(err) => error!("Failed to load inquiry form: {}", err),
        }
    });
}

#[component]
pub fn Contact() -> impl IntoView {
    let is_logged_in = use_require_auth();
    let state = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided");

    let schema = create_rw_signal(None::<FormSchema>);
    let is_submitting = create_rw_signal(false);
    let is_mounted = mount_flag();

    let gate = Rc::new(Cell::new(LoadGate::new()));
    create_effect({
        let is_mounted = Rc::clone(&is_mounted);
        move |_| {
            let authenticated = is_logged_in.get();
            let mut load_gate = gate.get();
            let should_fetch = load_gate.observe(authenticated);
            gate.set(load_gate);
            if !should_fetch {
                return;
            }

            let config =
                match state.with_untracked(|state| state.config.clone()) {
                    Some(config) => config,
                    None => {
                        error!(
                            "Cannot load inquiry form without configuration"
                        );
                        return;
                    }
                };
            let client = InquiryClient::new(config, DefaultTransport::new());
            spawn_schema_load(client, schema, Rc::clone(&is_mounted));
        }
    });

    let handle_submit = {
        let is_mounted = Rc::clone(&is_mounted);
        move |values: FormValues| {
            let config =
                match state.with_untracked(|state| state.config.clone()) {
                    Some(config) => config,
                    None => return,
                };
            is_submitting.set(true);
            let is_mounted = Rc::clone(&is_mounted);
            spawn_local(async move {
                let client =
                    InquiryClient::new(config, DefaultTransport::new());
                match client.submit(&values).await {
                    Ok(result) => state.update(|state| {
                        result.notify(&mut state.notifications)
                    }),
                    Err(err) => error!("{}", FormError::from(err)),
                }
                if is_mounted.get() {
                    is_submitting.set(false);
                }
            });
        }
    };

    move || {
        if !is_logged_in.get() {
            return ().into_view();
        }
        let Some(schema) = schema.get() else {
            return ().into_view();
        };

        let layout = FormLayout::from_schema(&schema);
        let form_state = create_rw_signal(FormState::from_layout(&layout));
        let on_submit: Box<dyn Fn(FormValues)> =
            Box::new(handle_submit.clone());

        view! {
            <div class="flex flex-col space-y-2 mb-10">
                <h1 class="w-full text-2xl">"Contact"</h1>
                <InquiryFormView
                    layout
                    form_state
                    is_submitting=is_submitting.into()
                    on_submit
                />
            </div>
        }
        .into_view()
    }
}
