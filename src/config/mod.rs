#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::DEFAULT_API_BASE_URL;
use crate::domain::model::{FetchMode, UserId};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BoardError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};

pub const FETCH_MODE_SEQUENTIAL: &str = "sequential";
pub const FETCH_MODE_CONCURRENT: &str = "concurrent";
pub const DEFAULT_CONCURRENCY: usize = 4;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_FALLBACK_USER_ID: UserId = 1;

/// Resolved settings for a page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub api_base_url: String,
    /// User whose posts are shown when a selection carries no usable id.
    pub fallback_user_id: UserId,
    pub fetch_mode: FetchMode,
    pub timeout_seconds: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fallback_user_id: DEFAULT_FALLBACK_USER_ID,
            fetch_mode: FetchMode::Sequential,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl BoardConfig {
    pub fn concurrency(&self) -> usize {
        match self.fetch_mode {
            FetchMode::Sequential => DEFAULT_CONCURRENCY,
            FetchMode::Concurrent { limit } => limit,
        }
    }

    pub fn parse_fetch_mode(mode: &str, limit: usize) -> Result<FetchMode> {
        match mode.trim().to_ascii_lowercase().as_str() {
            FETCH_MODE_SEQUENTIAL => Ok(FetchMode::Sequential),
            FETCH_MODE_CONCURRENT => Ok(FetchMode::Concurrent { limit }),
            other => Err(BoardError::InvalidConfigValueError {
                field: "fetch.mode".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Valid modes: {}, {}",
                    FETCH_MODE_SEQUENTIAL, FETCH_MODE_CONCURRENT
                ),
            }),
        }
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        validate_range("api.timeout_seconds", self.timeout_seconds, 1, 600)?;
        if self.fallback_user_id == 0 {
            return Err(BoardError::InvalidConfigValueError {
                field: "page.fallback_user_id".to_string(),
                value: "0".to_string(),
                reason: "User ids start at 1".to_string(),
            });
        }
        if let FetchMode::Concurrent { limit } = self.fetch_mode {
            validate_range("fetch.concurrency", limit, 1, 64)?;
        }
        Ok(())
    }
}

impl ConfigProvider for BoardConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn fallback_user_id(&self) -> UserId {
        self.fallback_user_id
    }

    fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallback_user_id(), 1);
        assert_eq!(config.fetch_mode(), FetchMode::Sequential);
    }

    #[test]
    fn test_parse_fetch_mode() {
        assert_eq!(
            BoardConfig::parse_fetch_mode("Concurrent", 6).unwrap(),
            FetchMode::Concurrent { limit: 6 }
        );
        assert_eq!(
            BoardConfig::parse_fetch_mode("sequential", 6).unwrap(),
            FetchMode::Sequential
        );
        assert!(BoardConfig::parse_fetch_mode("eager", 6).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = BoardConfig {
            fallback_user_id: 0,
            ..BoardConfig::default()
        };
        assert!(config.validate().is_err());

        config.fallback_user_id = 1;
        config.fetch_mode = FetchMode::Concurrent { limit: 0 };
        assert!(config.validate().is_err());

        config.fetch_mode = FetchMode::Sequential;
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
