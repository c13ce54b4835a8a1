use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::notifications::NotificationStack;
use crate::routes::contact::Contact;
use crate::routes::NotFound;
use crate::GlobalState;

const CONTACT_PATH: &str = "/contact";

#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(GlobalState::default());
    provide_meta_context();
    provide_context(state);

    view! {
        <Stylesheet id="inquiry" href="/pkg/tailwind.css"/>
        <Title text="Contact"/>
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <Router fallback=|| {
                view! { <NotFound home_path=CONTACT_PATH/> }.into_view()
            }>
                <NotificationStack />
                <main class="py-4">
                    <Routes>
                        <Route path="/" view=Contact/>
                        <Route path=CONTACT_PATH view=Contact/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
