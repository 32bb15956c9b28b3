//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Parse an environment variable if set, otherwise return `default`.
///
/// A set but unparsable value is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns its variable names; the process environment is shared across threads.

    #[test]
    fn test_get_env_missing() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_MISSING_VAR"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_MISSING_VAR"))
        );
    }

    #[test]
    fn test_get_env_parse_or_default() {
        let value: u64 = get_env_parse_or("LIB_UTILS_TEST_UNSET_NUMBER", 2000).unwrap();
        assert_eq!(value, 2000);
    }

    #[test]
    fn test_get_env_parse_wrong_format() {
        env::set_var("LIB_UTILS_TEST_BAD_NUMBER", "soon");
        let parsed = get_env_parse_or::<u64>("LIB_UTILS_TEST_BAD_NUMBER", 5);
        assert_eq!(parsed, Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_NUMBER")));
    }

    #[test]
    fn test_get_env_parse_trims() {
        env::set_var("LIB_UTILS_TEST_PADDED_NUMBER", " 42 ");
        assert_eq!(get_env_parse::<u32>("LIB_UTILS_TEST_PADDED_NUMBER"), Ok(42));
    }
}
