//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::page::TECHNOLOGIES_PATH;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="container">
                <A href=TECHNOLOGIES_PATH>
                    <span class="nav-title">"Фудграм"</span>
                </A>
            </div>
        </nav>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use leptos_router::components::Router;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_navbar_links_to_technologies() {
        leptos::mount::mount_to_body(|| view! { <Router><Navbar/></Router> });

        let document = web_sys::window().unwrap().document().unwrap();
        let link = document.query_selector("nav a").unwrap().unwrap();
        assert_eq!(link.get_attribute("href").as_deref(), Some("/technologies"));

        let brand = document.query_selector("nav a .nav-title").unwrap().unwrap();
        assert_eq!(brand.text_content().as_deref(), Some("Фудграм"));
    }
}
