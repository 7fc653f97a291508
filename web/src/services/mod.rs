//! Browser services

pub mod dom_head;

pub use dom_head::DomHead;
