//! UI Components

pub mod layout;
pub mod meta_tags;
pub mod navbar;

pub use layout::{Container, Main, Title};
pub use meta_tags::MetaTags;
pub use navbar::Navbar;
