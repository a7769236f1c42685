//! Error taxonomy for the load and selection pipelines.

use crate::host::Host;
use thiserror::Error;

/// Failure reported by a host capability call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("command exited unsuccessfully: {0}")]
    CommandFailed(String),

    #[error("host error: {0}")]
    Other(String),
}

pub type HostResult<T> = std::result::Result<T, HostError>;

/// Terminal pipeline outcomes.
///
/// Every variant is converted into exactly one error toast at the pipeline
/// boundary; the display text is the message the user sees. Nothing is
/// thrown past a command back into the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Unsupported platform: {0}")]
    PlatformUnsupported(String),

    #[error("Failed to read {0} configuration file")]
    ConfigUnreadable(String),

    #[error("Failed to parse {name} configuration file: {cause}")]
    ConfigUnparseable { name: String, cause: String },

    #[error("Failed to parse {name} configuration file: {issues}")]
    ConfigInvalidShape { name: String, issues: String },

    #[error("{command} command not installed to PATH, please install the '{command}' command.")]
    CommandUnavailable { command: String },

    #[error("Failed to open with {editor}: {cause}")]
    CommandInvocationFailed { editor: String, cause: String },
}

impl PipelineError {
    /// Emit the single user-visible notification for this failure.
    pub async fn report(&self, host: &dyn Host) {
        tracing::warn!("pipeline terminated: {self}");
        host.toast_error(&self.to_string()).await;
    }
}
