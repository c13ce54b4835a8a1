use inquiry::http::DefaultTransport;
use inquiry::InquiryClient;
use leptos::*;
use log::{debug, warn};

use crate::base::state::Session;
use crate::components::redirect_to;
use crate::GlobalState;

/// Signed-in state of the viewer. Probes the session once per app and
/// sends signed-out viewers to the login page.
pub fn use_require_auth() -> Signal<bool> {
    let state = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided");

    let session = create_read_slice(state, |state| state.session);
    let set_session =
        create_write_slice(state, |state, session| state.session = session);

    if session.get_untracked() == Session::Unknown {
        match state.with_untracked(|state| state.config.clone()) {
            Some(config) => {
                set_session.set(Session::Checking);
                spawn_local(async move {
                    let client =
                        InquiryClient::new(config, DefaultTransport::new());
                    let session = if client.check_session().await {
                        Session::Authenticated
                    } else {
                        Session::Anonymous
                    };
                    debug!("Session resolved: {:?}", session);
                    set_session.set(session);
                });
            }
            None => {
                warn!("No configuration; treating viewer as signed out");
                set_session.set(Session::Anonymous);
            }
        }
    }

    create_effect(move |_| {
        if session.get() == Session::Anonymous {
            let login_url = state.with_untracked(|state| {
                state
                    .config
                    .as_ref()
                    .map(|config| config.login_url().to_string())
            });
            if let Some(login_url) = login_url {
                if let Err(err) = redirect_to(&login_url) {
                    log::error!("{}", err);
                }
            }
        }
    });

    Signal::derive(move || session.get().is_authenticated())
}
