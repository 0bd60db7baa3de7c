//! Applying a layout plan to the real file system
//!
//! Every operation is defensively idempotent: directories are created with
//! create-if-missing semantics, whole files are written only when absent,
//! and the `.gitignore` merge appends only lines not already present. A
//! failing artifact is recorded and skipped; materialization never aborts
//! part-way and never rolls back.

use crate::layout::{FileKind, LayoutPlan, PlannedFile};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// What happened to one planned artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ArtifactStatus {
    Created,
    SkippedExisting,
    Overwritten,
    Failed(String),
}

/// One artifact's outcome, keyed by its project-relative path
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub path: String,
    pub status: ArtifactStatus,
}

/// Aggregate outcome of one materialization pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct MaterializationReport {
    pub entries: Vec<ReportEntry>,
}

impl MaterializationReport {
    fn record(&mut self, path: &str, status: ArtifactStatus) {
        self.entries.push(ReportEntry {
            path: path.to_string(),
            status,
        });
    }

    /// Entries that failed for a reason other than already existing.
    pub fn failures(&self) -> Vec<&ReportEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, ArtifactStatus::Failed(_)))
            .collect()
    }

    pub fn created_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == ArtifactStatus::Created)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.failures().is_empty()
    }
}

/// Apply a plan against the tree rooted at `root`.
///
/// Safe to run repeatedly: a second pass over an unchanged tree reports
/// every artifact as `SkippedExisting` and writes nothing.
pub async fn apply(root: &Path, plan: &LayoutPlan) -> MaterializationReport {
    let mut report = MaterializationReport::default();

    for dir in &plan.directories {
        ensure_dir(root, dir.as_str(), &mut report).await;
    }

    for file in &plan.outputs {
        match file.kind {
            // The manifest patcher owns package.json
            FileKind::Manifest => {}
            FileKind::GitIgnore => {
                merge_gitignore(root, file, &plan.gitignore_entries, &mut report).await
            }
            _ => write_if_absent(root, file, &mut report).await,
        }
    }

    report
}

async fn ensure_dir(root: &Path, dir: &str, report: &mut MaterializationReport) {
    let path = root.join(dir);
    if path.is_dir() {
        report.record(dir, ArtifactStatus::SkippedExisting);
        return;
    }
    match fs::create_dir_all(&path).await {
        Ok(()) => report.record(dir, ArtifactStatus::Created),
        Err(e) => report.record(dir, ArtifactStatus::Failed(e.to_string())),
    }
}

async fn write_if_absent(root: &Path, file: &PlannedFile, report: &mut MaterializationReport) {
    let path = root.join(file.path.as_str());

    // Existence alone skips the write: the file may be user-owned or hold
    // real compiled output, regardless of who created it.
    if path.exists() {
        report.record(file.path.as_str(), ArtifactStatus::SkippedExisting);
        return;
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent).await {
            report.record(file.path.as_str(), ArtifactStatus::Failed(e.to_string()));
            return;
        }
    }

    match fs::write(&path, &file.content).await {
        Ok(()) => report.record(file.path.as_str(), ArtifactStatus::Created),
        Err(e) => report.record(file.path.as_str(), ArtifactStatus::Failed(e.to_string())),
    }
}

async fn merge_gitignore(
    root: &Path,
    file: &PlannedFile,
    entries: &[String],
    report: &mut MaterializationReport,
) {
    let path = root.join(file.path.as_str());

    let existing = match fs::read_to_string(&path).await {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            report.record(file.path.as_str(), ArtifactStatus::Failed(e.to_string()));
            return;
        }
    };

    let current = existing.as_deref().unwrap_or("");
    let missing: Vec<&str> = entries
        .iter()
        .map(String::as_str)
        .filter(|entry| !current.contains(entry))
        .collect();

    if missing.is_empty() {
        report.record(file.path.as_str(), ArtifactStatus::SkippedExisting);
        return;
    }

    let mut block = missing.join("\n");
    block.push('\n');

    let (new_content, status) = match existing {
        None => (block, ArtifactStatus::Created),
        Some(mut content) => {
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }
            // Blank line between the user's entries and the appended block
            content.push('\n');
            content.push_str(&block);
            (content, ArtifactStatus::Overwritten)
        }
    };

    match fs::write(&path, new_content).await {
        Ok(()) => report.record(file.path.as_str(), status),
        Err(e) => report.record(file.path.as_str(), ArtifactStatus::Failed(e.to_string())),
    }
}
