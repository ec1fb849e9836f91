//! Subcommand implementations.

use anyhow::Result;
use exitcode::ExitCode;

use crate::api::ApiError;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::documents::SelectionError;

/// One-shot question command handler.
pub mod ask;

/// Chat mode command handler.
pub mod chat;

/// Configuration display command handler.
pub mod config;

/// Sample listing command handler.
pub mod samples;

/// One-shot upload command handler.
pub mod upload;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub api_url: Option<String>,
    pub config_path: Option<String>,
}

impl GlobalOptions {
    pub fn config_manager(&self) -> Result<ConfigManager> {
        match &self.config_path {
            Some(path) => Ok(ConfigManager::with_path(path)),
            None => ConfigManager::new(),
        }
    }

    /// Loads the config file and merges it with the CLI/environment overrides.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file_config = self.config_manager()?.load_or_default()?;
        let options = ResolveOptions {
            api_url: self.api_url.clone(),
        };
        resolve_config(&options, &file_config)
    }
}

/// Exit code for a failed backend call.
pub const fn api_exit_code(err: &ApiError) -> ExitCode {
    match err {
        ApiError::Transport { .. } => exitcode::UNAVAILABLE,
        ApiError::Request(_) => exitcode::TEMPFAIL,
        ApiError::Backend { .. } | ApiError::Decode(_) => exitcode::PROTOCOL,
        ApiError::EmptyQuery | ApiError::EmptyBatch => exitcode::USAGE,
    }
}

/// Exit code for a selection that could not be turned into an upload.
pub const fn selection_exit_code(err: &SelectionError) -> ExitCode {
    match err {
        SelectionError::Empty | SelectionError::UnknownSample(_) => exitcode::USAGE,
        SelectionError::SampleNotFound { .. } | SelectionError::Document(_) => exitcode::NOINPUT,
    }
}
