//! Scripted in-memory host.
//!
//! Backs the command crates' tests: files, existing paths and available
//! commands are declared up front, failures are injectable, and everything
//! a command does against the host is recorded as an ordered event log.

use crate::error::{HostError, HostResult};
use crate::host::Host;
use crate::list::ListModel;
use crate::platform::{BaseDir, Platform};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// One observable host call, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Rendered(ListModel),
    PlaceholderSet(String),
    SuccessToast(String),
    ErrorToast(String),
    Invoked { command: String, args: Vec<String> },
}

/// In-memory [`Host`] implementation.
pub struct MemoryHost {
    platform: Platform,
    files: HashMap<(BaseDir, String), String>,
    existing_paths: HashSet<String>,
    failing_existence_paths: HashSet<String>,
    available_commands: HashSet<String>,
    lookup_failure: Option<String>,
    invocation_failure: Option<String>,
    events: RwLock<Vec<HostEvent>>,
}

impl MemoryHost {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            files: HashMap::new(),
            existing_paths: HashSet::new(),
            failing_existence_paths: HashSet::new(),
            available_commands: HashSet::new(),
            lookup_failure: None,
            invocation_failure: None,
            events: RwLock::new(Vec::new()),
        }
    }

    /// Script a readable text file under a base-directory anchor.
    pub fn with_file(
        mut self,
        base: BaseDir,
        relative: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.files.insert((base, relative.into()), content.into());
        self
    }

    /// Script a path that exists on disk.
    pub fn with_existing_path(mut self, path: impl Into<String>) -> Self {
        self.existing_paths.insert(path.into());
        self
    }

    /// Make the existence check for `path` fail with an I/O error.
    pub fn with_failing_existence_check(mut self, path: impl Into<String>) -> Self {
        self.failing_existence_paths.insert(path.into());
        self
    }

    /// Script an executable available on the search path.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.available_commands.insert(command.into());
        self
    }

    /// Make every search-path lookup itself fail.
    pub fn with_failing_command_lookup(mut self, cause: impl Into<String>) -> Self {
        self.lookup_failure = Some(cause.into());
        self
    }

    /// Make every command invocation fail with the given cause.
    pub fn with_failing_invocation(mut self, cause: impl Into<String>) -> Self {
        self.invocation_failure = Some(cause.into());
        self
    }

    fn record(&self, event: HostEvent) {
        self.events.write().unwrap().push(event);
    }

    /// Full event log, in call order.
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.read().unwrap().clone()
    }

    /// Every rendered model, in call order.
    pub fn rendered(&self) -> Vec<ListModel> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Rendered(model) => Some(model),
                _ => None,
            })
            .collect()
    }

    /// Error toast messages, in call order.
    pub fn error_toasts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::ErrorToast(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// Success toast messages, in call order.
    pub fn success_toasts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::SuccessToast(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// Attempted process invocations, in call order.
    pub fn invocations(&self) -> Vec<(String, Vec<String>)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Invoked { command, args } => Some((command, args)),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Host for MemoryHost {
    async fn platform(&self) -> Platform {
        self.platform.clone()
    }

    async fn read_text_file(&self, base: BaseDir, relative: &str) -> HostResult<String> {
        self.files
            .get(&(base, relative.to_string()))
            .cloned()
            .ok_or_else(|| HostError::NotFound(relative.to_string()))
    }

    async fn path_exists(&self, path: &str) -> HostResult<bool> {
        if self.failing_existence_paths.contains(path) {
            return Err(HostError::Io(format!("cannot stat {path}")));
        }
        Ok(self.existing_paths.contains(path))
    }

    async fn has_command(&self, command: &str) -> HostResult<bool> {
        if let Some(cause) = &self.lookup_failure {
            return Err(HostError::Other(cause.clone()));
        }
        Ok(self.available_commands.contains(command))
    }

    async fn invoke_command(&self, command: &str, args: &[String]) -> HostResult<()> {
        self.record(HostEvent::Invoked {
            command: command.to_string(),
            args: args.to_vec(),
        });
        match &self.invocation_failure {
            Some(cause) => Err(HostError::CommandFailed(cause.clone())),
            None => Ok(()),
        }
    }

    async fn render(&self, model: ListModel) -> HostResult<()> {
        self.record(HostEvent::Rendered(model));
        Ok(())
    }

    async fn set_search_bar_placeholder(&self, text: &str) -> HostResult<()> {
        self.record(HostEvent::PlaceholderSet(text.to_string()));
        Ok(())
    }

    async fn toast_success(&self, message: &str) {
        self.record(HostEvent::SuccessToast(message.to_string()));
    }

    async fn toast_error(&self, message: &str) {
        self.record(HostEvent::ErrorToast(message.to_string()));
    }
}
