//! Foodgram Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};
use shared::page::TECHNOLOGIES_PATH;

use crate::components::Navbar;
use crate::pages::{NotFound, TechnologiesPage};
use crate::state::head::provide_head_context;

#[component]
pub fn App() -> impl IntoView {
    provide_head_context();

    view! {
        <Router>
            <Navbar/>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=|| view! { <Redirect path=TECHNOLOGIES_PATH/> }/>
                <Route path=path!("/technologies") view=TechnologiesPage/>
            </Routes>
        </Router>
    }
}
