//! Layout plan value types

use crate::validate::{CssPath, FolderName, RelPath};
use serde::Serialize;
use std::fmt;

/// Dev-dependency key of the parallel watcher needed by the
/// theme-and-plugin topology. Reconciled by the manifest patcher: added for
/// that topology, removed for every other.
pub const PARALLEL_WATCHER: &str = "concurrently";

/// Version requirement written alongside [`PARALLEL_WATCHER`].
pub const PARALLEL_WATCHER_VERSION: &str = "^8.2.2";

/// Project shape selected during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Topology {
    /// Separate CSS pipelines for a theme and a plugin
    Both,
    /// Theme pipeline only
    ThemeOnly,
    /// Plugin pipeline only
    PluginOnly,
    /// One shared output consumed by both theme and plugin
    Shared,
}

impl Topology {
    pub const ALL: [Topology; 4] = [
        Topology::Both,
        Topology::ThemeOnly,
        Topology::PluginOnly,
        Topology::Shared,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Topology::Both => "Both Theme and Plugin",
            Topology::ThemeOnly => "Theme Only",
            Topology::PluginOnly => "Plugin Only",
            Topology::Shared => "Shared CSS",
        }
    }

    /// Stable identifier used in CLI flags and error messages
    pub fn slug(&self) -> &'static str {
        match self {
            Topology::Both => "both",
            Topology::ThemeOnly => "theme-only",
            Topology::PluginOnly => "plugin-only",
            Topology::Shared => "shared",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Classes of generated files, each with its own write policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileKind {
    /// Compiled-output placeholder; may already hold real build output,
    /// so it is created only when absent
    GeneratedCss,
    /// Hand-edited input stylesheet; existing user edits are authoritative
    SourceStylesheet,
    /// Illustrative plugin/theme entry point; skipped whenever the target
    /// path exists at all
    ExampleCode,
    /// Build-tool configuration (postcss.config.js); created only when
    /// absent
    ToolConfig,
    /// `package.json`; owned by the manifest patcher, never written by the
    /// materializer
    Manifest,
    /// `.gitignore`; merged append-only, never replaced
    GitIgnore,
}

/// A single file the materializer is asked to produce
#[derive(Debug, Clone, Serialize)]
pub struct PlannedFile {
    pub path: RelPath,
    pub kind: FileKind,
    /// Whole-file payload. Empty for [`FileKind::GitIgnore`], which merges
    /// [`LayoutPlan::gitignore_entries`] line-wise instead.
    pub content: String,
}

/// An extra dev dependency the manifest must carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub name: &'static str,
    pub version: &'static str,
}

/// Resolved layout for one compile target (a plugin or a theme folder)
#[derive(Debug, Clone, Serialize)]
pub struct TargetLayout {
    pub name: FolderName,
    /// Folder under wp-content, e.g. `wp-content/plugins/acme`
    pub dir: RelPath,
    /// CSS path relative to [`Self::dir`]
    pub css_path: CssPath,
    /// Full output path from the project root
    pub css_output: RelPath,
}

/// Resolved layout for the shared-output topology
#[derive(Debug, Clone, Serialize)]
pub struct SharedLayout {
    pub plugin_name: FolderName,
    pub theme_name: FolderName,
    pub dir: RelPath,
    pub css_output: RelPath,
}

/// Immutable description of every directory, file, and build command a
/// topology implies. Constructed once per run by [`crate::layout::resolve`]
/// and consumed by the materializer, the manifest patcher, and the
/// verification probe.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutPlan {
    pub topology: Topology,
    /// Present for Both and PluginOnly
    pub plugin: Option<TargetLayout>,
    /// Present for Both and ThemeOnly
    pub theme: Option<TargetLayout>,
    /// Present for Shared
    pub shared: Option<SharedLayout>,
    /// Directories to ensure exist, project-root relative
    pub directories: Vec<RelPath>,
    /// Files to materialize, in application order
    pub outputs: Vec<PlannedFile>,
    /// Ordered script-name to shell-command pairs for the manifest
    pub build_commands: Vec<(String, String)>,
    /// `Some` only for the Both topology; `None` marks the well-known
    /// parallel-watcher key for removal
    pub extra_dev_dependency: Option<Dependency>,
    /// Lines the `.gitignore` merge must end up containing
    pub gitignore_entries: Vec<String>,
}

impl LayoutPlan {
    /// Resolved compiled-CSS output paths, in plan order.
    pub fn css_outputs(&self) -> Vec<&RelPath> {
        self.outputs
            .iter()
            .filter(|f| f.kind == FileKind::GeneratedCss)
            .map(|f| &f.path)
            .collect()
    }

    /// Source stylesheets the user edits, in plan order.
    pub fn source_stylesheets(&self) -> Vec<&RelPath> {
        self.outputs
            .iter()
            .filter(|f| f.kind == FileKind::SourceStylesheet)
            .map(|f| &f.path)
            .collect()
    }

    /// Look up a build command by script name.
    pub fn command(&self, name: &str) -> Option<&str> {
        self.build_commands
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, cmd)| cmd.as_str())
    }
}
