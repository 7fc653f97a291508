//! Page chrome: `Main`, `Container` and `Title`

use leptos::prelude::*;

#[component]
pub fn Main(children: Children) -> impl IntoView {
    view! {
        <main class="main">{children()}</main>
    }
}

#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! {
        <div class="container">{children()}</div>
    }
}

#[component]
pub fn Title(text: &'static str) -> impl IntoView {
    view! {
        <h1 class="title">{text}</h1>
    }
}
