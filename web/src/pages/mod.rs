//! Page modules

pub mod not_found;
pub mod technologies;

pub use not_found::NotFound;
pub use technologies::TechnologiesPage;
