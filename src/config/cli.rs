use crate::config::toml_config::TomlConfig;
use crate::config::{BoardConfig, FETCH_MODE_CONCURRENT, FETCH_MODE_SEQUENTIAL};
use crate::domain::model::{PostId, UserId};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "post-board")]
#[command(about = "Render an employee's posts and comments from a JSONPlaceholder-style API")]
pub struct CliArgs {
    /// TOML file with [api], [page] and [fetch] sections
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Employee to select; without it only the select menu and prompt are rendered
    #[arg(long)]
    pub user_id: Option<String>,

    /// Post ids whose "Show Comments" button is clicked after rendering
    #[arg(long, value_delimiter = ',')]
    pub toggle: Vec<PostId>,

    #[arg(long, value_parser = [FETCH_MODE_SEQUENTIAL, FETCH_MODE_CONCURRENT])]
    pub fetch_mode: Option<String>,

    #[arg(long)]
    pub concurrency: Option<usize>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long)]
    pub fallback_user_id: Option<UserId>,

    /// Write the rendered page here instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliArgs {
    /// Defaults, then the config file, then flags.
    pub fn board_config(&self) -> Result<BoardConfig> {
        let mut config = BoardConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut config)?;
        }

        if let Some(base_url) = &self.api_base_url {
            config.api_base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(user_id) = self.fallback_user_id {
            config.fallback_user_id = user_id;
        }
        if self.fetch_mode.is_some() || self.concurrency.is_some() {
            let limit = self.concurrency.unwrap_or_else(|| config.concurrency());
            let mode = match (&self.fetch_mode, self.concurrency) {
                (Some(mode), _) => mode.clone(),
                // A bare --concurrency implies concurrent fetching.
                (None, Some(_)) => FETCH_MODE_CONCURRENT.to_string(),
                (None, None) => FETCH_MODE_SEQUENTIAL.to_string(),
            };
            config.fetch_mode = BoardConfig::parse_fetch_mode(&mode, limit)?;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
