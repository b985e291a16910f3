use crate::utils::error::{CartError, Result};
use std::path::Path;
use url::Url;

pub const MAX_TIMEOUT_SECONDS: u64 = 300;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> CartError {
    CartError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The catalog URL gets `/products/{id}` and `/stock/{id}` appended, so it
/// must be a plain http(s) base without query or fragment.
pub fn validate_api_base_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| invalid(field, value, format!("not a catalog URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            value,
            format!("catalog must be served over http or https, got {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field, value, "catalog URL has no host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field,
            value,
            "product and stock paths are appended to this URL; drop the query or fragment",
        ));
    }
    Ok(())
}

/// Cart files live inside this directory; it may not exist yet but must not
/// be a regular file.
pub fn validate_storage_dir(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "cart storage directory is required"));
    }
    if value.contains('\0') {
        return Err(invalid(field, value, "cart storage directory contains a null byte"));
    }
    if Path::new(value).is_file() {
        return Err(invalid(field, value, "points at a file; a directory is required"));
    }
    Ok(())
}

pub fn validate_storage_key(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "cart storage key is required"));
    }
    if value.chars().any(char::is_control) {
        return Err(invalid(field, value, "cart storage key contains control characters"));
    }
    Ok(())
}

pub fn validate_timeout(field: &str, seconds: u64) -> Result<()> {
    if seconds == 0 || seconds > MAX_TIMEOUT_SECONDS {
        return Err(invalid(
            field,
            seconds,
            format!("catalog timeout must be between 1 and {} seconds", MAX_TIMEOUT_SECONDS),
        ));
    }
    Ok(())
}
