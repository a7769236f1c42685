//! Registry the host uses to look up and dispatch registered commands.

use crate::command::Command;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command '{0}' is already registered")]
    Duplicate(String),
}

/// Registered commands by id.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command with the host. One call per command.
    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<(), RegistryError> {
        let id = command.id().to_string();
        if self.commands.contains_key(&id) {
            return Err(RegistryError::Duplicate(id));
        }
        info!("Registered command: {} ({})", command.name(), id);
        self.commands.insert(id, command);
        Ok(())
    }

    /// Look up a command by id.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(id)
    }

    /// Ids of all registered commands.
    pub fn command_ids(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
