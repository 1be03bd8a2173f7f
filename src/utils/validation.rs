use crate::utils::error::{BoardError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> BoardError {
    BoardError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Checks a base URL that resource paths such as `/users` are appended to:
/// http(s), with a host, and no query string or fragment.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        let reason = format!("Unsupported URL scheme: {}", url.scheme());
        return Err(invalid(field_name, url_str, reason));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field_name, url_str, "URL has no host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            url_str,
            "Base URL cannot carry a query string or fragment",
        ));
    }
    Ok(())
}

/// Output and config file paths: non-blank, no NUL, and not a directory.
pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    if path.ends_with('/') || std::path::Path::new(path).is_dir() {
        return Err(invalid(field_name, path, "Path names a directory, not a file"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        let reason = format!("Value must be between {} and {}", min, max);
        return Err(invalid(field_name, value, reason));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://jsonplaceholder.typicode.com").is_ok());
        assert!(validate_url("api.base_url", "http://127.0.0.1:8080/").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_base_url_rejects_query_and_fragment() {
        let err = validate_url("api.base_url", "https://example.com/api?key=1").unwrap_err();
        assert!(err.to_string().contains("query string"));
        assert!(validate_url("api.base_url", "https://example.com/#top").is_err());
    }

    #[test]
    fn test_validate_path() {
        let dir = tempfile::tempdir().unwrap();

        assert!(validate_path("output", "page.html").is_ok());
        assert!(validate_path("output", "  ").is_err());
        assert!(validate_path("output", "bad\0path").is_err());
        assert!(validate_path("output", "out/").is_err());
        assert!(validate_path("output", dir.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("fetch.concurrency", 4usize, 1, 64).is_ok());
        assert!(validate_range("fetch.concurrency", 0usize, 1, 64).is_err());
        let err = validate_range("api.timeout_seconds", 601u64, 1, 600).unwrap_err();
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Configuration);
    }
}
