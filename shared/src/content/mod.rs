//! # Page Content
//!
//! Literal text shown on the "Технологии" page. Strings are replicated verbatim
//! in Russian; there is no localization layer.

mod technologies;

pub use technologies::TECHNOLOGIES;

/// One technology shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechnologyEntry {
    /// Short label, rendered emphasized
    pub name: &'static str,
    /// Human-readable explanation
    pub description: &'static str,
}

impl TechnologyEntry {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Document title and og:title.
pub const PAGE_TITLE: &str = "О проекте";

/// Content of `<meta name="description">`.
pub const PAGE_DESCRIPTION: &str = "Фудграм - Технологии";

/// Top-level heading.
pub const PAGE_HEADING: &str = "Технологии";

/// Heading above the list.
pub const PAGE_SUBHEADING: &str = "Технологии, которые применены в этом проекте:";
