//! Fallback for unknown routes

use leptos::prelude::*;
use leptos_router::components::A;
use shared::head::HeadTags;
use shared::page::TECHNOLOGIES_PATH;

use crate::components::{Container, Main, MetaTags, Title};

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Main>
            <MetaTags tags={HeadTags::new().title("Страница не найдена")}/>
            <Container>
                <Title text="404 - Страница не найдена"/>
                <A href=TECHNOLOGIES_PATH>"К странице «Технологии»"</A>
            </Container>
        </Main>
    }
}
