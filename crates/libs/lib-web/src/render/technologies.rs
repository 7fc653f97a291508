use maud::{html, Markup};
use shared::page::{DocumentFragment, ENTRY_SEPARATOR};

use super::layout::{container, document, main_block, title};

/// Content region of the page, without the document shell.
pub fn technologies_content(fragment: &DocumentFragment) -> Markup {
    html! {
        (title(fragment.heading))
        div class="content" {
            div {
                h2 class="subtitle" { (fragment.subheading) }
                div class="text" {
                    ul class="textItem" {
                        @for item in &fragment.items {
                            li class="textItem" {
                                strong { (item.label) }
                                (ENTRY_SEPARATOR)
                                (item.text)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Complete HTML document for `GET /technologies`.
pub fn render_technologies_page() -> String {
    let fragment = shared::page::render();
    document(&fragment.head, main_block(container(technologies_content(&fragment)))).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_deterministic() {
        assert_eq!(render_technologies_page(), render_technologies_page());
    }

    #[test]
    fn test_page_structure() {
        let html = render_technologies_page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>О проекте</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Фудграм - Технологии\">"));
        assert!(html.contains("<meta property=\"og:title\" content=\"О проекте\">"));
        assert!(html.contains("<h1 class=\"title\">Технологии</h1>"));
        assert!(html.contains("<h2 class=\"subtitle\">Технологии, которые применены в этом проекте:</h2>"));
        assert_eq!(html.matches("<li class=\"textItem\">").count(), 15);
    }

    #[test]
    fn test_first_item_markup() {
        let html = render_technologies_page();
        assert!(html.contains(
            "<li class=\"textItem\"><strong>Python</strong> — высокоуровневый язык программирования, \
             использующийся для создания серверной логики и работы с данными.</li>"
        ));
    }

    #[test]
    fn test_items_keep_order() {
        let html = render_technologies_page();
        let python = html.find("<strong>Python</strong>").unwrap();
        let docker = html.find("<strong>Docker</strong>").unwrap();
        let dotenv = html.find("<strong>python-dotenv</strong>").unwrap();
        assert!(python < docker && docker < dotenv);
    }
}
