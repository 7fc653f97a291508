//! # Shared Page Library
//!
//! Platform-independent core of the Foodgram "Технологии" page, used by both the
//! axum backend (server-side rendering) and the Leptos web app (browser rendering).
//!
//! ## Structure
//!
//! - **[`content`]**: Literal page data
//!   - **[`content::TECHNOLOGIES`]**: Ordered list of technology entries
//!   - **[`content::TechnologyEntry`]**: One `{name, description}` record
//! - **[`page`]**: Page declaration and rendering
//!   - **[`page::render`]**: Build the [`page::DocumentFragment`] of the page
//!   - **[`page::render_entries`]**: Generic entry list renderer
//! - **[`head`]**: Scoped document-head metadata
//!   - **[`head::HeadTags`]**: Declarative `<title>`/`<meta>` set
//!   - **[`head::mount`]**: Apply tags until the returned guard is dropped
//!
//! ## Usage
//!
//! ```rust
//! use shared::page::render;
//!
//! let fragment = render();
//! assert_eq!(fragment.heading, "Технологии");
//! assert_eq!(fragment.items.len(), 15);
//! ```

pub mod content;
pub mod head;
pub mod page;

pub use content::{TechnologyEntry, TECHNOLOGIES};
pub use head::{mount, HeadGuard, HeadKey, HeadManager, HeadTags, HeadTarget, MemoryHead, SharedHead};
pub use page::{render, render_entries, DocumentFragment, ListItem, StaticInfoPage};
