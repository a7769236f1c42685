//! Capabilities the launcher host exposes to commands.

use crate::error::HostResult;
use crate::list::ListModel;
use crate::platform::{BaseDir, Platform};
use async_trait::async_trait;

/// Capability surface a command runs against.
///
/// Every call crosses into the launcher process. All I/O is async so a
/// command never blocks the host's UI thread; toasts are fire-and-forget.
#[async_trait]
pub trait Host: Send + Sync {
    /// Detected operating system identifier.
    async fn platform(&self) -> Platform;

    /// Scoped read of a text file relative to a base-directory anchor.
    async fn read_text_file(&self, base: BaseDir, relative: &str) -> HostResult<String>;

    /// Whether a filesystem path exists.
    async fn path_exists(&self, path: &str) -> HostResult<bool>;

    /// Whether an executable is available on the process search path.
    async fn has_command(&self, command: &str) -> HostResult<bool>;

    /// Invoke an executable with arguments and wait for completion.
    async fn invoke_command(&self, command: &str, args: &[String]) -> HostResult<()>;

    /// Hand a display model to the host's rendering surface.
    async fn render(&self, model: ListModel) -> HostResult<()>;

    /// Set the search-bar placeholder text.
    async fn set_search_bar_placeholder(&self, text: &str) -> HostResult<()>;

    /// Toast-style success notification.
    async fn toast_success(&self, message: &str);

    /// Toast-style error notification.
    async fn toast_error(&self, message: &str);
}
