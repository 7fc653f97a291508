//! # Web Library
//!
//! HTTP server for the Foodgram pages: server-side rendering, static bundle
//! serving, middleware and configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod server;

pub use config::ServerConfig;
pub use error::{AppError, Result};
pub use server::{create_router, start_server};
