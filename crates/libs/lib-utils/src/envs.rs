//! # Environment Variables
//!
//! Read environment variables, with or without a fallback.

use std::env;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, or `default` when it is unset or blank.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    match get_env(name) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

// region:    --- Error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_MISSING"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_MISSING"))
        );
        assert_eq!(get_env_or("LIB_UTILS_TEST_MISSING", "dist"), "dist");
    }

    #[test]
    fn test_get_env_or_set_and_blank() {
        env::set_var("LIB_UTILS_TEST_DIST", "web/dist");
        assert_eq!(get_env("LIB_UTILS_TEST_DIST").as_deref(), Ok("web/dist"));
        assert_eq!(get_env_or("LIB_UTILS_TEST_DIST", "dist"), "web/dist");

        env::set_var("LIB_UTILS_TEST_DIST", "   ");
        assert_eq!(get_env_or("LIB_UTILS_TEST_DIST", "dist"), "dist");
        env::remove_var("LIB_UTILS_TEST_DIST");
    }
}
