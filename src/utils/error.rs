use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API responded with status {status} for {url}")]
    StatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Page element not found: {selector}")]
    MissingElementError { selector: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BoardError {
    pub fn missing_element(selector: impl Into<String>) -> Self {
        Self::MissingElementError {
            selector: selector.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::StatusError { .. } => ErrorCategory::Network,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Data,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::MissingElementError { .. } => ErrorCategory::Page,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Page => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(_) | Self::StatusError { .. } => {
                "Could not reach the posts API".to_string()
            }
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(_) => {
                "The API returned data in an unexpected shape".to_string()
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Configuration value '{}' is not valid", field)
            }
            Self::MissingElementError { selector } => {
                format!("The page is missing '{}'", selector)
            }
        }
    }

    /// Process exit code: 2 for retryable failures, 1 for bad input, 3 when
    /// the page itself is broken.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the API base URL and your network connection",
            ErrorCategory::Data => "Check the output path and the API response format",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Page => "Rebuild the page skeleton before rendering",
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
