//! # Server-Side Rendering
//!
//! maud renditions of the pages, built from the same [`shared::page::DocumentFragment`]
//! the web app renders in the browser.

pub mod layout;
pub mod technologies;

pub use technologies::render_technologies_page;
