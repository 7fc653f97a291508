//! # Server Errors
//!
//! Start-up failures of the page server. Request handling itself cannot fail:
//! every page is rendered from static content.

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
}
