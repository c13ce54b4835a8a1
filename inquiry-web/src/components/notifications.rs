use inquiry::notify::{Notification, NotificationLevel};
use leptos::*;

use crate::components::buttons::ButtonType;
use crate::GlobalState;

fn level_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => {
            "flex justify-between items-center p-3 mb-2 rounded bg-green-100 \
             text-green-800"
        }
        NotificationLevel::Error => {
            "flex justify-between items-center p-3 mb-2 rounded bg-red-100 \
             text-red-800"
        }
    }
}

/// Pending notifications, oldest on top. Each stays until dismissed.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let state = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided");

    let notifications = create_read_slice(state, |state| {
        state.notifications.iter().cloned().collect::<Vec<Notification>>()
    });

    view! {
        <div
            class="fixed top-4 right-4 w-80 z-50"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || notifications.get()
                key=|notification| notification.id()
                children=move |notification| {
                    let id = notification.id();
                    let dismiss = ButtonType::Dismiss;
                    let role = if notification.level().is_error() {
                        "alert"
                    } else {
                        "status"
                    };
                    view! {
                        <div
                            class=level_class(notification.level())
                            role=role
                        >
                            <span>{notification.message().to_string()}</span>
                            <button
                                type="button"
                                class=dismiss.button_class(false)
                                on:click=move |_| {
                                    state.update(|state| state.dismiss(id))
                                }
                            >
                                {dismiss.button_text()}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
