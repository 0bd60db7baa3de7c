//! Toolkit cleanup
//!
//! Once setup is done the toolkit's own files (docs, bootstrap scripts,
//! editor history) can be removed from the project tree, leaving only the
//! user's WordPress project plus the generated build configuration. Much
//! simpler than setup on purpose: a fixed removal list, no plan.

use crate::content;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

/// Toolkit files and folders removed by cleanup
pub const TOOLKIT_FILES: &[&str] = &[
    "docs",
    "WARP.md",
    "scripts",
    "setup.sh",
    "setup.bat",
    ".history",
];

/// Essential project files cleanup always leaves alone
pub const PROJECT_FILES: &[&str] = &[
    "README.md",
    "package.json",
    "tailwind.config.js",
    "postcss.config.js",
    "src",
    "wp-content",
    ".gitignore",
    "node_modules",
];

/// Outcome of one cleanup pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupReport {
    pub removed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

fn present(root: &Path, candidates: &[&'static str]) -> Vec<&'static str> {
    candidates
        .iter()
        .copied()
        .filter(|name| root.join(name).exists())
        .collect()
}

/// Toolkit files that actually exist under `root`, in removal order.
pub fn removable_toolkit_files(root: &Path) -> Vec<&'static str> {
    present(root, TOOLKIT_FILES)
}

/// Project files that exist under `root`; shown so the user sees what
/// stays.
pub fn kept_project_files(root: &Path) -> Vec<&'static str> {
    present(root, PROJECT_FILES)
}

/// Remove every present toolkit file, continuing past individual failures.
pub async fn remove_toolkit_files(root: &Path) -> CleanupReport {
    let mut report = CleanupReport::default();

    for name in removable_toolkit_files(root) {
        let path = root.join(name);
        let result = if path.is_dir() {
            fs::remove_dir_all(&path).await
        } else {
            fs::remove_file(&path).await
        };

        match result {
            Ok(()) => report.removed.push(name.to_string()),
            Err(e) => report.failed.push((name.to_string(), e.to_string())),
        }
    }

    report
}

/// Replace `.gitignore` with the clean-project version. Cleanup is the one
/// place an existing `.gitignore` is overwritten: the merged toolkit
/// entries it replaces are exactly what was appended during setup.
pub async fn write_clean_gitignore(root: &Path) -> std::io::Result<()> {
    fs::write(root.join(".gitignore"), content::clean_gitignore()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_removes_only_toolkit_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/GUIDE.md"), "guide").unwrap();
        std::fs::write(dir.path().join("WARP.md"), "warp").unwrap();
        std::fs::write(dir.path().join("setup.sh"), "#!/bin/sh").unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();

        let report = remove_toolkit_files(dir.path()).await;

        assert!(report.is_clean());
        assert_eq!(report.removed, ["docs", "WARP.md", "setup.sh"]);
        assert!(!dir.path().join("docs").exists());
        assert!(dir.path().join("package.json").is_file());
        assert!(dir.path().join("src").is_dir());
    }

    #[tokio::test]
    async fn test_cleanup_on_clean_tree_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();

        let report = remove_toolkit_files(dir.path()).await;
        assert!(report.removed.is_empty());
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn test_clean_gitignore_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".gitignore"), "old-entry/\n").unwrap();

        write_clean_gitignore(dir.path()).await.unwrap();

        let after = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert!(!after.contains("old-entry/"));
        assert!(after.contains("node_modules/"));
    }

    #[test]
    fn test_kept_files_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::write(dir.path().join(".gitignore"), "").unwrap();

        assert_eq!(
            kept_project_files(dir.path()),
            ["package.json", ".gitignore"]
        );
    }
}
