//! Application state

pub mod head;
