//! # command-recent-workspaces
//!
//! Launcher command surfacing workspaces VS Code has associated with a
//! profile, read from the editor's global-storage `storage.json`. Only
//! `file://` workspaces that still exist on disk are listed, as a flat
//! list titled by their final path segment; selecting an entry opens it in
//! VS Code.
//!
//! The load pipeline mirrors command-project-manager: locate, read, parse,
//! validate, transform, render, with every failure terminating the run in
//! a single error toast. The one concurrent stage is the per-path
//! existence fan-out, which is order-preserving.

use async_trait::async_trait;
use futures::future::join_all;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};
use vspalette_host::shape::type_name;
use vspalette_host::{
    flatten_issues, BaseDir, Command, ConfigLocation, DisplayItem, Host, Icon, ListModel,
    PipelineError, Platform, ShapeIssue,
};

const CONFIG_NAME: &str = "VSCode storage";
const SEARCH_PLACEHOLDER: &str = "Search for projects...";
const FOLDER_ICON: &str = "ri:folder-open-fill";
const FILE_SCHEME: &str = "file://";

/// Per-platform location of the VS Code global-storage file.
fn config_location(platform: &Platform) -> Option<ConfigLocation> {
    match platform {
        Platform::MacOs => Some(ConfigLocation::new(
            BaseDir::Home,
            "Library/Application Support/Code/User/globalStorage/storage.json",
        )),
        Platform::Windows => Some(ConfigLocation::new(
            BaseDir::AppData,
            "Code/User/globalStorage/storage.json",
        )),
        Platform::Linux => Some(ConfigLocation::new(
            BaseDir::Home,
            ".config/Code/User/globalStorage/storage.json",
        )),
        Platform::Unsupported(_) => None,
    }
}

/// Validate the parsed document and extract workspace URIs in file order.
///
/// Expected shape: `{ profileAssociations: { workspaces: { <uri>: <profile> } } }`
/// with string profiles. Any mismatch rejects the whole file.
fn validate_workspace_uris(value: &Value) -> Result<Vec<String>, Vec<ShapeIssue>> {
    let Some(root) = value.as_object() else {
        return Err(vec![ShapeIssue::new(
            "$",
            format!("expected an object, found {}", type_name(value)),
        )]);
    };

    let associations = match root.get("profileAssociations") {
        Some(Value::Object(obj)) => obj,
        Some(other) => {
            return Err(vec![ShapeIssue::new(
                "profileAssociations",
                format!("expected an object, found {}", type_name(other)),
            )])
        }
        None => {
            return Err(vec![ShapeIssue::new("profileAssociations", "missing field")]);
        }
    };

    let workspaces = match associations.get("workspaces") {
        Some(Value::Object(obj)) => obj,
        Some(other) => {
            return Err(vec![ShapeIssue::new(
                "profileAssociations.workspaces",
                format!("expected an object, found {}", type_name(other)),
            )])
        }
        None => {
            return Err(vec![ShapeIssue::new(
                "profileAssociations.workspaces",
                "missing field",
            )]);
        }
    };

    let mut issues = Vec::new();
    for (uri, profile) in workspaces {
        if !profile.is_string() {
            issues.push(ShapeIssue::new(
                format!("profileAssociations.workspaces[\"{uri}\"]"),
                format!("expected a string, found {}", type_name(profile)),
            ));
        }
    }

    if issues.is_empty() {
        Ok(workspaces.keys().cloned().collect())
    } else {
        Err(issues)
    }
}

/// Keep only local-file workspaces, stripping the scheme.
///
/// Other schemes (remote, virtual) are dropped without reporting; that is
/// intended filtering, not an error path.
fn local_candidates(uris: &[String]) -> Vec<String> {
    uris.iter()
        .filter_map(|uri| uri.strip_prefix(FILE_SCHEME))
        .map(str::to_string)
        .collect()
}

/// Display name for a workspace path: its final path segment.
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Drop candidates that no longer exist on disk.
///
/// Checks fan out concurrently and complete order-preserving. A check that
/// itself fails is logged and degrades to "does not exist" so one broken
/// path never blocks the remaining workspaces.
async fn existing_candidates(host: &dyn Host, candidates: Vec<String>) -> Vec<String> {
    let checks = candidates.iter().map(|path| async move {
        match host.path_exists(path).await {
            Ok(exists) => exists,
            Err(err) => {
                warn!("Failed to check if {} exists: {}", path, err);
                false
            }
        }
    });
    let results = join_all(checks).await;

    candidates
        .into_iter()
        .zip(results)
        .filter(|(_, exists)| *exists)
        .map(|(path, _)| path)
        .collect()
}

/// The Recent Workspaces launcher command.
#[derive(Debug, Default)]
pub struct RecentWorkspacesCommand;

impl RecentWorkspacesCommand {
    pub fn new() -> Self {
        Self
    }

    async fn build_model(&self, host: &dyn Host) -> Result<Vec<DisplayItem>, PipelineError> {
        let platform = host.platform().await;
        debug!("loading {} workspaces on {}", CONFIG_NAME, platform);

        let location = config_location(&platform)
            .ok_or_else(|| PipelineError::PlatformUnsupported(platform.to_string()))?;

        let content = match host.read_text_file(location.base, location.relative).await {
            Ok(content) if !content.is_empty() => content,
            _ => return Err(PipelineError::ConfigUnreadable(CONFIG_NAME.to_string())),
        };

        let value: Value =
            serde_json::from_str(&content).map_err(|err| PipelineError::ConfigUnparseable {
                name: CONFIG_NAME.to_string(),
                cause: err.to_string(),
            })?;

        let uris =
            validate_workspace_uris(&value).map_err(|issues| PipelineError::ConfigInvalidShape {
                name: CONFIG_NAME.to_string(),
                issues: flatten_issues(&issues),
            })?;

        let candidates = local_candidates(&uris);
        let paths = existing_candidates(host, candidates).await;
        debug!("{} workspaces survive existence filtering", paths.len());

        Ok(paths
            .into_iter()
            .map(|path| DisplayItem {
                title: display_name(&path),
                subtitle: path.clone(),
                value: path,
                icon: Icon::iconify(FOLDER_ICON),
            })
            .collect())
    }
}

#[async_trait]
impl Command for RecentWorkspacesCommand {
    fn id(&self) -> &'static str {
        "recent-workspaces"
    }

    fn name(&self) -> &'static str {
        "VSCode Recent Workspaces"
    }

    async fn load(&self, host: &dyn Host) {
        // Empty render first, so the UI shows before any I/O is awaited.
        if let Err(err) = host.render(ListModel::empty()).await {
            warn!("initial render failed: {err}");
        }

        match self.build_model(host).await {
            Ok(items) => {
                if let Err(err) = host.set_search_bar_placeholder(SEARCH_PLACEHOLDER).await {
                    warn!("failed to set search placeholder: {err}");
                }
                if let Err(err) = host.render(ListModel::Items(items)).await {
                    warn!("render failed: {err}");
                }
            }
            Err(err) => err.report(host).await,
        }
    }

    async fn on_list_item_selected(&self, host: &dyn Host, value: &str) {
        vspalette_editor::handle_selection(host, value).await;
    }
}
