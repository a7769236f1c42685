//! Command lifecycle contract between the host and a registered command.

use crate::host::Host;
use async_trait::async_trait;

/// A searchable-list command registered with the launcher.
///
/// Errors never cross this boundary: implementations convert every failure
/// into a toast on the host and return normally, so a broken config file
/// cannot crash the launcher.
#[async_trait]
pub trait Command: Send + Sync {
    /// Stable identifier used at registration time.
    fn id(&self) -> &'static str;

    /// Human-readable command name.
    fn name(&self) -> &'static str;

    /// Build and render the command's list.
    ///
    /// Must render an empty list before awaiting any I/O so the UI shows
    /// immediately on invocation.
    async fn load(&self, host: &dyn Host);

    /// The search term changed. Filtering happens host-side; default no-op.
    async fn on_search_term_change(&self, _host: &dyn Host, _term: &str) {}

    /// An item was activated; `value` is the item's opaque selection value.
    async fn on_list_item_selected(&self, host: &dyn Host, value: &str);
}
