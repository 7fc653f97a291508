//! # Document Head Metadata
//!
//! Declarative `<title>`/`<meta>` tags and a manager that applies them to a
//! document head for as long as a page is mounted.
//!
//! A page declares its tags as [`HeadTags`] and calls [`mount`], which returns a
//! [`HeadGuard`]. While the guard lives, its tags win over anything mounted
//! before it. Dropping the guard removes its layer and the head falls back to
//! the previous layer, or to the values that were there before any page mounted.
//!
//! ```rust
//! use shared::head::{mount, HeadKey, HeadManager, HeadTags, MemoryHead};
//!
//! let head = HeadManager::shared(MemoryHead::with_title("Фудграм"));
//! let guard = mount(&head, HeadTags::new().title("О проекте"));
//! assert_eq!(head.borrow().target().get(&HeadKey::Title), Some("О проекте"));
//!
//! drop(guard);
//! assert_eq!(head.borrow().target().get(&HeadKey::Title), Some("Фудграм"));
//! ```

mod manager;
mod memory;

pub use manager::{mount, HeadGuard, HeadManager, HeadTarget, LayerId, SharedHead};
pub use memory::MemoryHead;

use std::fmt;

/// Addressable slot in the document head.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadKey {
    /// `<title>`
    Title,
    /// `<meta name="..." content="...">`
    MetaName(String),
    /// `<meta property="..." content="...">`
    MetaProperty(String),
}

impl HeadKey {
    pub fn name(name: impl Into<String>) -> Self {
        Self::MetaName(name.into())
    }

    pub fn property(property: impl Into<String>) -> Self {
        Self::MetaProperty(property.into())
    }
}

impl fmt::Display for HeadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadKey::Title => write!(f, "title"),
            HeadKey::MetaName(name) => write!(f, "meta[name={name}]"),
            HeadKey::MetaProperty(property) => write!(f, "meta[property={property}]"),
        }
    }
}

/// Ordered set of head tag declarations.
///
/// Declaring the same key twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadTags {
    tags: Vec<(HeadKey, String)>,
}

impl HeadTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.with(HeadKey::Title, title)
    }

    pub fn meta_name(self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.with(HeadKey::name(name), content)
    }

    pub fn meta_property(self, property: impl Into<String>, content: impl Into<String>) -> Self {
        self.with(HeadKey::property(property), content)
    }

    pub fn with(mut self, key: HeadKey, content: impl Into<String>) -> Self {
        let content = content.into();
        match self.tags.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = content,
            None => self.tags.push((key, content)),
        }
        self
    }

    pub fn get(&self, key: &HeadKey) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HeadKey, &str)> {
        self.tags.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &HeadKey> {
        self.tags.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_keep_declaration_order() {
        let tags = HeadTags::new()
            .title("О проекте")
            .meta_name("description", "Фудграм - Технологии")
            .meta_property("og:title", "О проекте");

        let keys: Vec<String> = tags.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["title", "meta[name=description]", "meta[property=og:title]"]);
    }

    #[test]
    fn test_redeclared_key_keeps_last_value() {
        let tags = HeadTags::new().title("first").title("second");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get(&HeadKey::Title), Some("second"));
    }

    #[test]
    fn test_name_and_property_are_distinct() {
        let tags = HeadTags::new()
            .meta_name("og:title", "by name")
            .meta_property("og:title", "by property");
        assert_eq!(tags.get(&HeadKey::name("og:title")), Some("by name"));
        assert_eq!(tags.get(&HeadKey::property("og:title")), Some("by property"));
    }
}
