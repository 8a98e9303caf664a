//! Command-line presentation of graph queries.

pub mod commands;
pub mod render;

use thiserror::Error;

use crate::types::GraphError;

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable narration.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Errors raised while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    /// The graph rejected the input.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
