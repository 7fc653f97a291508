//! Технологии Page - technologies Foodgram is built with

use leptos::prelude::*;
use shared::page::{render, ENTRY_SEPARATOR};

use crate::components::{Container, Main, MetaTags, Title};

#[component]
pub fn TechnologiesPage() -> impl IntoView {
    let fragment = render();
    let items = fragment
        .items
        .into_iter()
        .map(|item| {
            view! {
                <li class="textItem">
                    <strong>{item.label}</strong>
                    {ENTRY_SEPARATOR}
                    {item.text}
                </li>
            }
        })
        .collect_view();

    view! {
        <Main>
            <MetaTags tags=fragment.head/>
            <Container>
                <Title text=fragment.heading/>
                <div class="content">
                    <div>
                        <h2 class="subtitle">{fragment.subheading}</h2>
                        <div class="text">
                            <ul class="textItem">{items}</ul>
                        </div>
                    </div>
                </div>
            </Container>
        </Main>
    }
}
