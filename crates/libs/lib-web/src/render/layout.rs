//! Page chrome shared by every server-rendered page.
//!
//! Class names match the Leptos components in the web app so both renditions
//! pick up the same stylesheet.

use maud::{html, Markup, DOCTYPE};
use shared::head::{HeadKey, HeadTags};

/// Stylesheet emitted by the web bundle.
pub const STYLESHEET_HREF: &str = "/styles.css";

/// Full HTML document: `<head>` from `tags`, `body` as the page content.
pub fn document(tags: &HeadTags, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (head_tags(tags))
                link rel="stylesheet" href=(STYLESHEET_HREF);
            }
            body {
                (body)
            }
        }
    }
}

pub fn head_tags(tags: &HeadTags) -> Markup {
    html! {
        @for (key, content) in tags.iter() {
            @match key {
                HeadKey::Title => { title { (content) } }
                HeadKey::MetaName(name) => { meta name=(name) content=(content); }
                HeadKey::MetaProperty(property) => { meta property=(property) content=(content); }
            }
        }
    }
}

pub fn main_block(content: Markup) -> Markup {
    html! {
        main class="main" { (content) }
    }
}

pub fn container(content: Markup) -> Markup {
    html! {
        div class="container" { (content) }
    }
}

pub fn title(text: &str) -> Markup {
    html! {
        h1 class="title" { (text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_tags_markup() {
        let tags = HeadTags::new()
            .title("О проекте")
            .meta_name("description", "Фудграм - Технологии")
            .meta_property("og:title", "О проекте");
        assert_eq!(
            head_tags(&tags).into_string(),
            "<title>О проекте</title>\
             <meta name=\"description\" content=\"Фудграм - Технологии\">\
             <meta property=\"og:title\" content=\"О проекте\">"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(title("<b>&</b>").into_string(), "<h1 class=\"title\">&lt;b&gt;&amp;&lt;/b&gt;</h1>");
    }
}
