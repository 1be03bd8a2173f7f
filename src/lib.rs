pub mod adapters;
pub mod config;
pub mod core;
pub mod dom;
pub mod domain;
pub mod render;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::HttpPostsApi;
pub use config::BoardConfig;
pub use crate::core::{PageState, PostBoard};
pub use dom::Document;
pub use utils::error::{BoardError, Result};
