//! # command-project-manager
//!
//! Launcher command surfacing projects configured in the VS Code Project
//! Manager extension (`projects.json`). Projects are grouped into one
//! section per tag plus a terminal `[no tags]` section; selecting an entry
//! opens its root path in VS Code.
//!
//! The load pipeline is strict: locate the per-platform config file, read
//! it, parse it, validate the whole document against the projects schema,
//! then transform and render. Any failure terminates the run with a single
//! error toast, leaving the initial empty render in place.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{debug, warn};
use vspalette_host::shape::type_name;
use vspalette_host::{
    flatten_issues, BaseDir, Command, ConfigLocation, DisplayItem, DisplaySection, Host, Icon,
    ListModel, PipelineError, Platform, ShapeIssue,
};

const CONFIG_NAME: &str = "Project Manager";
const SEARCH_PLACEHOLDER: &str = "Search for projects...";
const UNTAGGED_SECTION_TITLE: &str = "[no tags]";
const FOLDER_ICON: &str = "ri:folder-open-fill";

/// One configured project. Only constructed from a fully validated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub enabled: bool,
    pub name: String,
    pub paths: Vec<String>,
    pub root_path: String,
    pub tags: Vec<String>,
}

/// Per-platform location of the Project Manager projects file.
fn config_location(platform: &Platform) -> Option<ConfigLocation> {
    match platform {
        Platform::MacOs => Some(ConfigLocation::new(
            BaseDir::Home,
            "Library/Application Support/Code/User/globalStorage/alefragnani.project-manager/projects.json",
        )),
        Platform::Windows => Some(ConfigLocation::new(
            BaseDir::AppData,
            "Code/User/globalStorage/alefragnani.project-manager/projects.json",
        )),
        Platform::Linux => Some(ConfigLocation::new(
            BaseDir::Home,
            ".config/Code/User/globalStorage/alefragnani.project-manager/projects.json",
        )),
        Platform::Unsupported(_) => None,
    }
}

fn expect_bool(
    obj: &Map<String, Value>,
    path: &str,
    field: &str,
    issues: &mut Vec<ShapeIssue>,
) -> Option<bool> {
    match obj.get(field) {
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            issues.push(ShapeIssue::new(
                format!("{path}.{field}"),
                format!("expected a boolean, found {}", type_name(other)),
            ));
            None
        }
        None => {
            issues.push(ShapeIssue::new(format!("{path}.{field}"), "missing field"));
            None
        }
    }
}

fn expect_string(
    obj: &Map<String, Value>,
    path: &str,
    field: &str,
    issues: &mut Vec<ShapeIssue>,
) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(ShapeIssue::new(
                format!("{path}.{field}"),
                format!("expected a string, found {}", type_name(other)),
            ));
            None
        }
        None => {
            issues.push(ShapeIssue::new(format!("{path}.{field}"), "missing field"));
            None
        }
    }
}

fn expect_string_array(
    obj: &Map<String, Value>,
    path: &str,
    field: &str,
    issues: &mut Vec<ShapeIssue>,
) -> Option<Vec<String>> {
    let entries = match obj.get(field) {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            issues.push(ShapeIssue::new(
                format!("{path}.{field}"),
                format!("expected an array, found {}", type_name(other)),
            ));
            return None;
        }
        None => {
            issues.push(ShapeIssue::new(format!("{path}.{field}"), "missing field"));
            return None;
        }
    };

    let mut out = Vec::with_capacity(entries.len());
    let mut ok = true;
    for (idx, entry) in entries.iter().enumerate() {
        match entry {
            Value::String(s) => out.push(s.clone()),
            other => {
                issues.push(ShapeIssue::new(
                    format!("{path}.{field}[{idx}]"),
                    format!("expected a string, found {}", type_name(other)),
                ));
                ok = false;
            }
        }
    }
    ok.then_some(out)
}

/// Validate the parsed document against the projects schema.
///
/// All-or-nothing: every mismatch in the file is collected and any issue
/// rejects the whole document.
fn validate_projects(value: &Value) -> Result<Vec<Project>, Vec<ShapeIssue>> {
    let Some(entries) = value.as_array() else {
        return Err(vec![ShapeIssue::new(
            "$",
            format!("expected an array, found {}", type_name(value)),
        )]);
    };

    let mut issues = Vec::new();
    let mut projects = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let path = format!("[{idx}]");
        let Some(obj) = entry.as_object() else {
            issues.push(ShapeIssue::new(
                path,
                format!("expected an object, found {}", type_name(entry)),
            ));
            continue;
        };

        let enabled = expect_bool(obj, &path, "enabled", &mut issues);
        let name = expect_string(obj, &path, "name", &mut issues);
        let paths = expect_string_array(obj, &path, "paths", &mut issues);
        let root_path = expect_string(obj, &path, "rootPath", &mut issues);
        let tags = expect_string_array(obj, &path, "tags", &mut issues);

        if let (Some(enabled), Some(name), Some(paths), Some(root_path), Some(tags)) =
            (enabled, name, paths, root_path, tags)
        {
            projects.push(Project {
                enabled,
                name,
                paths,
                root_path,
                tags,
            });
        }
    }

    if issues.is_empty() {
        Ok(projects)
    } else {
        Err(issues)
    }
}

fn project_item(project: &Project) -> DisplayItem {
    DisplayItem {
        title: project.name.clone(),
        subtitle: project.root_path.clone(),
        value: project.root_path.clone(),
        icon: Icon::iconify(FOLDER_ICON),
    }
}

/// Group projects into display sections.
///
/// One section per distinct tag, ordered by first occurrence in the
/// flattened record-order tag sequence; a project with N tags appears in N
/// sections. The terminal `[no tags]` section always exists, even empty.
fn build_sections(projects: &[Project]) -> Vec<DisplaySection> {
    let mut seen = HashSet::new();
    let mut sections = Vec::new();

    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if !seen.insert(tag.clone()) {
            continue;
        }
        sections.push(DisplaySection {
            title: tag.clone(),
            items: projects
                .iter()
                .filter(|p| p.tags.contains(tag))
                .map(project_item)
                .collect(),
        });
    }

    sections.push(DisplaySection {
        title: UNTAGGED_SECTION_TITLE.to_string(),
        items: projects
            .iter()
            .filter(|p| p.tags.is_empty())
            .map(project_item)
            .collect(),
    });

    sections
}

/// The Project Manager launcher command.
#[derive(Debug, Default)]
pub struct ProjectManagerCommand;

impl ProjectManagerCommand {
    pub fn new() -> Self {
        Self
    }

    async fn build_model(&self, host: &dyn Host) -> Result<Vec<DisplaySection>, PipelineError> {
        let platform = host.platform().await;
        debug!("loading {} projects on {}", CONFIG_NAME, platform);

        let location = config_location(&platform)
            .ok_or_else(|| PipelineError::PlatformUnsupported(platform.to_string()))?;

        let content = match host.read_text_file(location.base, location.relative).await {
            Ok(content) if !content.is_empty() => content,
            // Absence, emptiness and read failure share one reporting path.
            _ => return Err(PipelineError::ConfigUnreadable(CONFIG_NAME.to_string())),
        };

        let value: Value =
            serde_json::from_str(&content).map_err(|err| PipelineError::ConfigUnparseable {
                name: CONFIG_NAME.to_string(),
                cause: err.to_string(),
            })?;

        let projects =
            validate_projects(&value).map_err(|issues| PipelineError::ConfigInvalidShape {
                name: CONFIG_NAME.to_string(),
                issues: flatten_issues(&issues),
            })?;

        debug!("validated {} projects", projects.len());
        Ok(build_sections(&projects))
    }
}

#[async_trait]
impl Command for ProjectManagerCommand {
    fn id(&self) -> &'static str {
        "project-manager"
    }

    fn name(&self) -> &'static str {
        "VSCode Project Manager"
    }

    async fn load(&self, host: &dyn Host) {
        // Empty render first, so the UI shows before any I/O is awaited.
        if let Err(err) = host.render(ListModel::empty()).await {
            warn!("initial render failed: {err}");
        }

        match self.build_model(host).await {
            Ok(sections) => {
                if let Err(err) = host.set_search_bar_placeholder(SEARCH_PLACEHOLDER).await {
                    warn!("failed to set search placeholder: {err}");
                }
                if let Err(err) = host.render(ListModel::Sections(sections)).await {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vspalette_host::{HostEvent, MemoryHost};

    const LINUX_CONFIG: &str =
        ".config/Code/User/globalStorage/alefragnani.project-manager/projects.json";

    fn project(name: &str, root: &str, tags: &[&str]) -> Value {
        json!({
            "enabled": true,
            "name": name,
            "paths": [],
            "rootPath": root,
            "tags": tags,
        })
    }

    fn host_with_projects(projects: Value) -> MemoryHost {
        MemoryHost::new(Platform::Linux).with_file(
            BaseDir::Home,
            LINUX_CONFIG,
            projects.to_string(),
        )
    }

    fn final_sections(host: &MemoryHost) -> Vec<DisplaySection> {
        match host.rendered().last().cloned() {
            Some(ListModel::Sections(sections)) => sections,
            other => panic!("expected a sectioned render, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_section_count_is_distinct_tags_plus_one() {
        let host = host_with_projects(json!([
            project("Foo", "/p/foo", &["web", "rust"]),
            project("Bar", "/p/bar", &["web"]),
            project("Baz", "/p/baz", &[]),
        ]));

        ProjectManagerCommand::new().load(&host).await;

        let sections = final_sections(&host);
        assert_eq!(sections.len(), 3);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["web", "rust", "[no tags]"]);
    }

    #[tokio::test]
    async fn test_multi_tagged_project_appears_once_per_tag() {
        let host = host_with_projects(json!([project("Foo", "/p/foo", &["a", "b"])]));

        ProjectManagerCommand::new().load(&host).await;

        let sections = final_sections(&host);
        for title in ["a", "b"] {
            let section = sections.iter().find(|s| s.title == title).unwrap();
            assert_eq!(section.items.len(), 1);
            assert_eq!(section.items[0].value, "/p/foo");
        }
    }

    #[tokio::test]
    async fn test_untagged_section_holds_exactly_untagged_projects() {
        let host = host_with_projects(json!([
            project("Foo", "/p/foo", &["web"]),
            project("Bar", "/p/bar", &[]),
        ]));

        ProjectManagerCommand::new().load(&host).await;

        let sections = final_sections(&host);
        let untagged = sections.iter().find(|s| s.title == "[no tags]").unwrap();
        assert_eq!(untagged.items.len(), 1);
        assert_eq!(untagged.items[0].title, "Bar");

        let web = sections.iter().find(|s| s.title == "web").unwrap();
        assert_eq!(web.items[0].title, "Foo");
        assert_eq!(web.items[0].value, "/p/foo");
    }

    #[tokio::test]
    async fn test_untagged_section_exists_even_when_empty() {
        let host = host_with_projects(json!([project("Foo", "/p/foo", &["web"])]));

        ProjectManagerCommand::new().load(&host).await;

        let sections = final_sections(&host);
        assert_eq!(sections.last().unwrap().title, "[no tags]");
        assert!(sections.last().unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_reports_single_parse_error() {
        let host =
            MemoryHost::new(Platform::Linux).with_file(BaseDir::Home, LINUX_CONFIG, "{not json");

        ProjectManagerCommand::new().load(&host).await;

        let errors = host.error_toasts();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Failed to parse Project Manager configuration file:"));
        // Only the initial empty render happened; no partial items.
        assert_eq!(host.rendered(), vec![ListModel::empty()]);
    }

    #[tokio::test]
    async fn test_shape_violation_reports_field_level_issue() {
        let host = host_with_projects(json!([{
            "enabled": true,
            "name": "Foo",
            "paths": [],
            "rootPath": "/p/foo",
            "tags": ["web", 42],
        }]));

        ProjectManagerCommand::new().load(&host).await;

        let errors = host.error_toasts();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("[0].tags[1]"));
        assert!(errors[0].contains("expected a string, found a number"));
        assert_eq!(host.rendered(), vec![ListModel::empty()]);
    }

    #[tokio::test]
    async fn test_validation_is_all_or_nothing() {
        let host = host_with_projects(json!([
            project("Good", "/p/good", &[]),
            { "enabled": "yes", "name": "Bad", "paths": [], "rootPath": "/p/bad", "tags": [] },
        ]));

        ProjectManagerCommand::new().load(&host).await;

        assert_eq!(host.error_toasts().len(), 1);
        assert_eq!(host.rendered(), vec![ListModel::empty()]);
    }

    #[tokio::test]
    async fn test_missing_file_reports_unreadable() {
        let host = MemoryHost::new(Platform::Linux);

        ProjectManagerCommand::new().load(&host).await;

        assert_eq!(
            host.error_toasts(),
            vec!["Failed to read Project Manager configuration file"]
        );
    }

    #[tokio::test]
    async fn test_empty_file_reports_unreadable() {
        let host = MemoryHost::new(Platform::Linux).with_file(BaseDir::Home, LINUX_CONFIG, "");

        ProjectManagerCommand::new().load(&host).await;

        assert_eq!(
            host.error_toasts(),
            vec!["Failed to read Project Manager configuration file"]
        );
    }

    #[tokio::test]
    async fn test_unsupported_platform_is_reported_not_crashed() {
        let host = MemoryHost::new(Platform::Unsupported("haiku".to_string()));

        ProjectManagerCommand::new().load(&host).await;

        assert_eq!(host.error_toasts(), vec!["Unsupported platform: haiku"]);
        // The empty render from pipeline start still stands.
        assert_eq!(host.rendered(), vec![ListModel::empty()]);
    }

    #[tokio::test]
    async fn test_empty_render_first_and_placeholder_before_final_render() {
        let host = host_with_projects(json!([project("Foo", "/p/foo", &["web"])]));

        ProjectManagerCommand::new().load(&host).await;

        let events = host.events();
        assert_eq!(events[0], HostEvent::Rendered(ListModel::empty()));
        let placeholder_pos = events
            .iter()
            .position(|e| matches!(e, HostEvent::PlaceholderSet(p) if p == "Search for projects..."))
            .unwrap();
        let final_render_pos = events
            .iter()
            .rposition(|e| matches!(e, HostEvent::Rendered(ListModel::Sections(_))))
            .unwrap();
        assert!(placeholder_pos < final_render_pos);
    }

    #[tokio::test]
    async fn test_zero_projects_renders_empty_but_valid_sections() {
        let host = host_with_projects(json!([]));

        ProjectManagerCommand::new().load(&host).await;

        assert!(host.error_toasts().is_empty());
        let sections = final_sections(&host);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "[no tags]");
    }

    #[tokio::test]
    async fn test_windows_reads_from_app_data_anchor() {
        let host = MemoryHost::new(Platform::Windows).with_file(
            BaseDir::AppData,
            "Code/User/globalStorage/alefragnani.project-manager/projects.json",
            json!([project("Foo", "C:/p/foo", &[])]).to_string(),
        );

        ProjectManagerCommand::new().load(&host).await;

        assert!(host.error_toasts().is_empty());
        assert_eq!(final_sections(&host).len(), 1);
    }

    #[tokio::test]
    async fn test_disabled_projects_are_still_listed() {
        let host = host_with_projects(json!([{
            "enabled": false,
            "name": "Dormant",
            "paths": [],
            "rootPath": "/p/dormant",
            "tags": [],
        }]));

        ProjectManagerCommand::new().load(&host).await;

        let sections = final_sections(&host);
        assert_eq!(sections.last().unwrap().items[0].title, "Dormant");
    }
}
