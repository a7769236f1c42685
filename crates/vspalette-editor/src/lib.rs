//! Shared open-in-editor action and selection handling.
//!
//! Both vspalette commands resolve a selection the same way: log the
//! selected value, dispatch on the detected platform, and open the path
//! with the `code` command, reporting every outcome through host toasts.
//! Nothing here returns an error to the caller; a selection can never
//! crash the handler.

use tracing::info;
use vspalette_host::{Host, PipelineError, Platform};

/// Executable VS Code exposes on the process search path.
pub const CODE_COMMAND: &str = "code";

/// Editor name used in notifications.
pub const EDITOR_NAME: &str = "VSCode";

/// Open `path` in VS Code via the `code` command.
///
/// The availability check runs first; an unavailable command is reported
/// with an actionable error and no invocation is attempted. A successful
/// invocation produces one success toast, a failing one an error toast
/// carrying the underlying cause.
pub async fn open_in_editor(host: &dyn Host, path: &str) {
    match host.has_command(CODE_COMMAND).await {
        Ok(false) => {
            PipelineError::CommandUnavailable {
                command: CODE_COMMAND.to_string(),
            }
            .report(host)
            .await;
        }
        Ok(true) => match host.invoke_command(CODE_COMMAND, &[path.to_string()]).await {
            Ok(()) => {
                host.toast_success(&format!("Opened with {EDITOR_NAME}"))
                    .await;
            }
            Err(err) => {
                PipelineError::CommandInvocationFailed {
                    editor: EDITOR_NAME.to_string(),
                    cause: err.to_string(),
                }
                .report(host)
                .await;
            }
        },
        // The lookup itself failed; still a reported condition, never a panic.
        Err(err) => {
            host.toast_error(&err.to_string()).await;
        }
    }
}

/// Selection entry point shared by both commands.
///
/// `value` is the activated item's opaque selection value, treated as an
/// absolute filesystem path.
pub async fn handle_selection(host: &dyn Host, value: &str) {
    info!("Selected project: {}", value);
    match host.platform().await {
        Platform::MacOs | Platform::Windows | Platform::Linux => {
            open_in_editor(host, value).await;
        }
        Platform::Unsupported(raw) => {
            PipelineError::PlatformUnsupported(raw).report(host).await;
        }
    }
}
