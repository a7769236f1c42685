//! Display model handed to the host's rendering surface.

use serde::{Deserialize, Serialize};

/// Icon reference understood by the host's icon renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub kind: IconKind,
    pub value: String,
}

/// How the icon `value` is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Name looked up in the host's Iconify set.
    Iconify,
}

impl Icon {
    pub fn iconify(value: impl Into<String>) -> Self {
        Self {
            kind: IconKind::Iconify,
            value: value.into(),
        }
    }
}

/// A single selectable row.
///
/// `value` is the opaque identifier the host hands back on selection; for
/// vspalette commands it is always an absolute filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub title: String,
    pub subtitle: String,
    pub value: String,
    pub icon: Icon,
}

/// A named, ordered group of display items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySection {
    pub title: String,
    pub items: Vec<DisplayItem>,
}

/// The rendering model: a flat list or a collection of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListModel {
    Items(Vec<DisplayItem>),
    Sections(Vec<DisplaySection>),
}

impl ListModel {
    /// Empty flat list, rendered before any I/O so the UI is never blank.
    pub fn empty() -> Self {
        ListModel::Items(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ListModel::Items(items) => items.is_empty(),
            ListModel::Sections(sections) => sections.iter().all(|s| s.items.is_empty()),
        }
    }
}
