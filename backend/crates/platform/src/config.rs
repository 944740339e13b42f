//! Environment Configuration Helpers
//!
//! Small typed accessors over process environment variables. Values are
//! read once at startup; nothing here caches or reloads.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::crypto::from_base64;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Read a variable, treating empty values as unset
pub fn env_opt(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a variable, falling back to `default` when unset
pub fn env_parse_or<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_opt(name) {
        Some(raw) => parse_value(name, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}

/// Decode a base64 secret and enforce a minimum length in bytes
pub fn decode_secret(
    name: &'static str,
    raw: &str,
    min_len: usize,
) -> Result<Vec<u8>, ConfigError> {
    let bytes = from_base64(raw.trim()).map_err(|e| ConfigError::Invalid {
        name,
        reason: format!("not valid base64 ({e})"),
    })?;

    if bytes.len() < min_len {
        return Err(ConfigError::Invalid {
            name,
            reason: format!("must decode to at least {min_len} bytes (got {})", bytes.len()),
        });
    }

    Ok(bytes)
}

/// Split a comma-separated list, dropping blank entries
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::to_base64;

    #[test]
    fn test_decode_secret() {
        let raw = to_base64(&[1u8; 32]);
        assert_eq!(decode_secret("TOKEN_SECRET", &raw, 32).unwrap(), vec![1u8; 32]);
    }

    #[test]
    fn test_decode_secret_too_short() {
        let raw = to_base64(&[1u8; 8]);
        let err = decode_secret("TOKEN_SECRET", &raw, 32).unwrap_err();
        assert!(err.to_string().contains("at least 32 bytes"));
    }

    #[test]
    fn test_decode_secret_not_base64() {
        assert!(matches!(
            decode_secret("TOKEN_SECRET", "%%%", 1),
            Err(ConfigError::Invalid { name: "TOKEN_SECRET", .. })
        ));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u64>("TTL", " 3600 ").unwrap(), 3600);
        assert!(parse_value::<u64>("TTL", "soon").is_err());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("http://a.test, ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
