//! Post-setup verification probe
//!
//! Re-reads the tree after materialization and reports a checklist of
//! expected artifacts. The probe only looks at what exists, not at who
//! created it, so it equally validates a project that was already set up
//! before this run. Read-only; a failing checklist is surfaced to the
//! operator but never fails the run.

use crate::layout::LayoutPlan;
use serde::Serialize;
use std::path::Path;

/// Build-tool config the toolkit ships with the project
pub const TAILWIND_CONFIG: &str = "tailwind.config.js";

/// One expected artifact and whether it was found
#[derive(Debug, Clone, Serialize)]
pub struct CheckItem {
    pub label: String,
    pub passed: bool,
}

/// Ordered artifact checklist for one plan
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChecklistReport {
    pub items: Vec<CheckItem>,
}

impl ChecklistReport {
    fn check(&mut self, label: impl Into<String>, passed: bool) {
        self.items.push(CheckItem {
            label: label.into(),
            passed,
        });
    }

    /// Logical AND of every entry.
    pub fn passed(&self) -> bool {
        self.items.iter().all(|item| item.passed)
    }

    pub fn failed_items(&self) -> Vec<&CheckItem> {
        self.items.iter().filter(|item| !item.passed).collect()
    }
}

/// Probe the tree rooted at `root` for everything the plan expects.
pub fn verify(root: &Path, plan: &LayoutPlan) -> ChecklistReport {
    let mut report = ChecklistReport::default();

    report.check(
        "Package.json exists",
        root.join(crate::manifest::MANIFEST_FILE).is_file(),
    );
    report.check("Tailwind config exists", root.join(TAILWIND_CONFIG).is_file());
    report.check(
        "PostCSS config exists",
        root.join("postcss.config.js").is_file(),
    );

    for source in plan.source_stylesheets() {
        report.check(
            format!("Input CSS exists ({})", source),
            root.join(source.as_str()).is_file(),
        );
    }

    report.check("Node modules exist", root.join("node_modules").is_dir());

    if let Some(plugin) = &plan.plugin {
        report.check(
            "Plugin directory exists",
            root.join(plugin.dir.as_str()).is_dir(),
        );
        let css_dir = plugin.css_output.parent().unwrap_or_else(|| plugin.dir.clone());
        report.check(
            "Plugin CSS directory exists",
            root.join(css_dir.as_str()).is_dir(),
        );
    }

    if let Some(theme) = &plan.theme {
        report.check(
            "Theme directory exists",
            root.join(theme.dir.as_str()).is_dir(),
        );
        let css_dir = theme.css_output.parent().unwrap_or_else(|| theme.dir.clone());
        report.check(
            "Theme CSS directory exists",
            root.join(css_dir.as_str()).is_dir(),
        );
    }

    if let Some(shared) = &plan.shared {
        report.check(
            "Shared CSS directory exists",
            root.join(shared.dir.as_str()).is_dir(),
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{resolve, SetupRequest, Topology};
    use crate::materialize;
    use crate::validate::validate_folder_name;

    fn theme_plan() -> LayoutPlan {
        let mut req = SetupRequest::new(Topology::ThemeOnly);
        req.theme_name = Some(validate_folder_name("acme-theme").unwrap());
        resolve(&req).unwrap()
    }

    #[test]
    fn test_empty_tree_fails_every_check() {
        let dir = tempfile::tempdir().unwrap();
        let report = verify(dir.path(), &theme_plan());

        assert!(!report.passed());
        assert!(report.items.iter().all(|item| !item.passed));
    }

    #[tokio::test]
    async fn test_materialized_tree_passes_once_tooling_is_present() {
        let dir = tempfile::tempdir().unwrap();
        let plan = theme_plan();

        materialize::apply(dir.path(), &plan).await;
        // Shipped by the toolkit / the package installer, not the plan
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::write(dir.path().join(TAILWIND_CONFIG), "module.exports = {}").unwrap();
        std::fs::create_dir_all(dir.path().join("node_modules")).unwrap();

        let report = verify(dir.path(), &plan);
        assert!(report.passed(), "failed: {:?}", report.failed_items());
    }

    #[tokio::test]
    async fn test_probe_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        verify(dir.path(), &theme_plan());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_missing_node_modules_is_the_only_failure() {
        let dir = tempfile::tempdir().unwrap();
        let plan = theme_plan();

        materialize::apply(dir.path(), &plan).await;
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::write(dir.path().join(TAILWIND_CONFIG), "module.exports = {}").unwrap();

        let report = verify(dir.path(), &plan);
        assert!(!report.passed());
        let failed = report.failed_items();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].label, "Node modules exist");
    }
}
