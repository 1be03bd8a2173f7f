use crate::config::{BoardConfig, FETCH_MODE_CONCURRENT, FETCH_MODE_SEQUENTIAL};
use crate::domain::model::{FetchMode, UserId};
use crate::utils::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file. Every section and key may be omitted;
/// whatever is present overrides the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub api: Option<ApiSection>,
    pub page: Option<PageSection>,
    pub fetch: Option<FetchSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSection {
    pub fallback_user_id: Option<UserId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchSection {
    pub mode: Option<String>,
    pub concurrency: Option<usize>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BoardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| BoardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the file's values over `config`.
    pub fn apply_to(&self, config: &mut BoardConfig) -> Result<()> {
        if let Some(api) = &self.api {
            if let Some(base_url) = &api.base_url {
                config.api_base_url = base_url.clone();
            }
            if let Some(timeout) = api.timeout_seconds {
                config.timeout_seconds = timeout;
            }
        }

        if let Some(page) = &self.page {
            if let Some(user_id) = page.fallback_user_id {
                config.fallback_user_id = user_id;
            }
        }

        if let Some(fetch) = &self.fetch {
            let limit = fetch.concurrency.unwrap_or_else(|| config.concurrency());
            let mode = fetch.mode.as_deref().unwrap_or(match config.fetch_mode {
                FetchMode::Sequential => FETCH_MODE_SEQUENTIAL,
                FetchMode::Concurrent { .. } => FETCH_MODE_CONCURRENT,
            });
            config.fetch_mode = BoardConfig::parse_fetch_mode(mode, limit)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "https://api.example.com"
timeout_seconds = 3

[page]
fallback_user_id = 4

[fetch]
mode = "concurrent"
concurrency = 8
"#;

        let file = TomlConfig::from_toml_str(toml_content).unwrap();
        let mut config = BoardConfig::default();
        file.apply_to(&mut config).unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.fallback_user_id, 4);
        assert_eq!(config.fetch_mode, FetchMode::Concurrent { limit: 8 });
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = TomlConfig::from_toml_str("[page]\nfallback_user_id = 2\n").unwrap();
        let mut config = BoardConfig::default();
        file.apply_to(&mut config).unwrap();

        assert_eq!(config.fallback_user_id, 2);
        assert_eq!(config.api_base_url, BoardConfig::default().api_base_url);
        assert_eq!(config.fetch_mode, FetchMode::Sequential);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("POST_BOARD_TEST_API", "https://test.api.com");

        let toml = "[api]\nbase_url = \"${POST_BOARD_TEST_API}\"\n";
        let file = TomlConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            file.api.unwrap().base_url.as_deref(),
            Some("https://test.api.com")
        );

        std::env::remove_var("POST_BOARD_TEST_API");
    }

    #[test]
    fn test_unknown_fetch_mode_rejected() {
        let file = TomlConfig::from_toml_str("[fetch]\nmode = \"parallel\"\n").unwrap();
        let mut config = BoardConfig::default();
        assert!(file.apply_to(&mut config).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(TomlConfig::from_toml_str("[api]\nendpoint = \"x\"\n").is_err());
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let file = TomlConfig::from_toml_str("[api]\nbase_url = \"invalid-url\"\n").unwrap();
        let mut config = BoardConfig::default();
        file.apply_to(&mut config).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[fetch]\nmode = \"sequential\"\n")
            .unwrap();

        let file = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(file.fetch.unwrap().mode.as_deref(), Some("sequential"));
    }
}
