//! # vspalette-host
//!
//! Host capability surface shared by vspalette launcher commands.
//!
//! Commands run inside a launcher host and never touch the operating system
//! directly: platform detection, scoped file reads, process invocation, list
//! rendering and toast notifications all go through the [`Host`] trait. A
//! command itself is a value implementing [`Command`], registered with the
//! host through a [`CommandRegistry`].
//!
//! The crate also ships [`MemoryHost`], a scripted in-memory host that the
//! command crates use for their tests.

pub mod command;
pub mod error;
pub mod host;
pub mod list;
pub mod memory;
pub mod platform;
pub mod registry;
pub mod shape;

pub use command::Command;
pub use error::{HostError, HostResult, PipelineError};
pub use host::Host;
pub use list::{DisplayItem, DisplaySection, Icon, IconKind, ListModel};
pub use memory::{HostEvent, MemoryHost};
pub use platform::{BaseDir, ConfigLocation, Platform};
pub use registry::{CommandRegistry, RegistryError};
pub use shape::{flatten_issues, ShapeIssue};
