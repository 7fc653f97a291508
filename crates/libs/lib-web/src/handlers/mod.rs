//! # HTTP Request Handlers
//!
//! - **[`pages`]**: Server-rendered pages
//!   - `GET /technologies` - The "Технологии" page
//!
//! - **[`health`]**: Liveness check
//!   - `GET /health` - Service status as JSON
//!
//! Any other path is answered from the static web bundle (see [`crate::server`]).

pub mod health;
pub mod pages;
