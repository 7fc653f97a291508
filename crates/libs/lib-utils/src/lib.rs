//! # Utilities Library
//!
//! Shared utility functions for reading configuration from the environment.

pub mod envs;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or};
