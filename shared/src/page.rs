//! # Static Info Page
//!
//! Declaration and rendering of the "Технологии" page.
//!
//! Rendering is split in two: [`render_entries`] turns any entry list into list
//! items, and [`StaticInfoPage::render`] composes those items with the page copy
//! and head tags into a [`DocumentFragment`]. Both the server and the browser
//! app build their markup from that fragment.

use crate::content::{
    TechnologyEntry, PAGE_DESCRIPTION, PAGE_HEADING, PAGE_SUBHEADING, PAGE_TITLE, TECHNOLOGIES,
};
use crate::head::HeadTags;

/// Route the page is registered under.
pub const TECHNOLOGIES_PATH: &str = "/technologies";

/// Joins an item's label and text.
pub const ENTRY_SEPARATOR: &str = " — ";

/// A page made only of literal content.
#[derive(Debug, Clone, Copy)]
pub struct StaticInfoPage {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub og_title: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub entries: &'static [TechnologyEntry],
}

/// The "Технологии" page.
pub const TECHNOLOGIES_PAGE: StaticInfoPage = StaticInfoPage {
    path: TECHNOLOGIES_PATH,
    title: PAGE_TITLE,
    description: PAGE_DESCRIPTION,
    og_title: PAGE_TITLE,
    heading: PAGE_HEADING,
    subheading: PAGE_SUBHEADING,
    entries: TECHNOLOGIES,
};

impl StaticInfoPage {
    pub fn head_tags(&self) -> HeadTags {
        HeadTags::new()
            .title(self.title)
            .meta_name("description", self.description)
            .meta_property("og:title", self.og_title)
    }

    pub fn render(&self) -> DocumentFragment {
        DocumentFragment {
            head: self.head_tags(),
            heading: self.heading,
            subheading: self.subheading,
            items: render_entries(self.entries),
        }
    }
}

/// One rendered list item: emphasized `label`, separator, `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem {
    pub label: &'static str,
    pub text: &'static str,
}

impl ListItem {
    /// Item text with markup stripped, e.g. `"Docker — система ..."`.
    pub fn plain_text(&self) -> String {
        format!("{}{}{}", self.label, ENTRY_SEPARATOR, self.text)
    }
}

/// Rendered page: head tags plus the content region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFragment {
    pub head: HeadTags,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub items: Vec<ListItem>,
}

/// Render entries in their given order.
pub fn render_entries(entries: &[TechnologyEntry]) -> Vec<ListItem> {
    entries
        .iter()
        .map(|entry| ListItem {
            label: entry.name,
            text: entry.description,
        })
        .collect()
}

/// Render the "Технологии" page.
pub fn render() -> DocumentFragment {
    TECHNOLOGIES_PAGE.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::{mount, HeadKey, HeadManager, MemoryHead};

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(), render());
    }

    #[test]
    fn test_first_item_and_count() {
        let fragment = render();
        assert_eq!(fragment.items.len(), 15);
        assert_eq!(
            fragment.items[0].plain_text(),
            "Python — высокоуровневый язык программирования, использующийся для создания серверной логики и работы с данными."
        );
        assert_eq!(fragment.items[0].label, "Python");
    }

    #[test]
    fn test_items_follow_entry_order() {
        let fragment = render();
        for (item, entry) in fragment.items.iter().zip(TECHNOLOGIES) {
            assert_eq!(item.label, entry.name);
            assert_eq!(item.text, entry.description);
            assert!(item.plain_text().contains(" — "));
        }
    }

    #[test]
    fn test_page_copy() {
        let fragment = render();
        assert_eq!(fragment.heading, "Технологии");
        assert_eq!(fragment.subheading, "Технологии, которые применены в этом проекте:");
        assert_eq!(fragment.head.get(&HeadKey::Title), Some("О проекте"));
        assert_eq!(
            fragment.head.get(&HeadKey::name("description")),
            Some("Фудграм - Технологии")
        );
        assert_eq!(fragment.head.get(&HeadKey::property("og:title")), Some("О проекте"));
    }

    #[test]
    fn test_render_entries_generic() {
        let entries = [
            TechnologyEntry::new("Rust", "язык"),
            TechnologyEntry::new("Leptos", "фреймворк"),
        ];
        let items = render_entries(&entries);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].plain_text(), "Leptos — фреймворк");
        assert!(render_entries(&[]).is_empty());
    }

    #[test]
    fn test_mounting_page_sets_title() {
        let head = HeadManager::shared(MemoryHead::new());
        let guard = mount(&head, render().head);
        assert_eq!(head.borrow().target().get(&HeadKey::Title), Some("О проекте"));
        drop(guard);
        assert_eq!(head.borrow().target().get(&HeadKey::Title), None);
    }
}
