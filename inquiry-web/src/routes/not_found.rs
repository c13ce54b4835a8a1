use leptos::*;
use leptos_router::A;

/// Shown for paths without a route. Does not redirect.
#[component]
pub fn NotFound(home_path: &'static str) -> impl IntoView {
    view! {
        <div class="py-4" data-view="not-found">
            <h1 class="w-full text-2xl">"Page not found"</h1>
            <A href=home_path class="text-blue-600 underline">
                "Back to the contact form"
            </A>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use leptos_router::Router;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_not_found_stays_on_page() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let before = window.location().href().unwrap();

        let parent: HtmlElement =
            document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&parent).unwrap();
        mount_to(parent.clone(), || {
            view! {
                <Router>
                    <NotFound home_path="/contact"/>
                </Router>
            }
        });

        assert!(parent
            .query_selector("[data-view=not-found]")
            .unwrap()
            .is_some());
        let link = parent.query_selector("a").unwrap().unwrap();
        assert_eq!(link.get_attribute("href").as_deref(), Some("/contact"));
        assert_eq!(window.location().href().unwrap(), before);
    }
}
