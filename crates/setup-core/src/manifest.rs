//! package.json patching
//!
//! The patcher owns the manifest's script table and the parallel-watcher
//! dev dependency, nothing else: every other field round-trips untouched,
//! key order included (serde_json's `preserve_order` feature). The script
//! table is replaced wholesale so stale scripts from a prior topology never
//! linger.

use crate::layout::{LayoutPlan, PARALLEL_WATCHER};
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Build-tool manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// Manifest problems; all fatal, raised before any manifest mutation
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("{MANIFEST_FILE} is not valid JSON: {0}")]
    Parse(String),

    #[error("{MANIFEST_FILE} field {0:?} is not a JSON object")]
    UnexpectedShape(&'static str),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Patch the manifest text to match the plan.
///
/// Pure text-to-text: the caller decides where the result goes. Returns an
/// error (and guarantees nothing was mutated) when the input is not a JSON
/// object.
pub fn patch(plan: &LayoutPlan, manifest_text: &str) -> Result<String, ManifestError> {
    let mut root: Value =
        serde_json::from_str(manifest_text).map_err(|e| ManifestError::Parse(e.to_string()))?;
    let top = root
        .as_object_mut()
        .ok_or(ManifestError::UnexpectedShape("."))?;

    let mut scripts = Map::new();
    for (name, command) in &plan.build_commands {
        scripts.insert(name.clone(), Value::String(command.clone()));
    }
    top.insert("scripts".to_string(), Value::Object(scripts));

    reconcile_dev_dependencies(top, plan)?;

    let mut out = serde_json::to_string_pretty(&root)
        .expect("a JSON value always serializes");
    out.push('\n');
    Ok(out)
}

/// Add the plan's extra dev dependency, or drop the well-known
/// parallel-watcher key when the plan does not need it (a previously-Both
/// project downgrades cleanly).
fn reconcile_dev_dependencies(
    top: &mut Map<String, Value>,
    plan: &LayoutPlan,
) -> Result<(), ManifestError> {
    match &plan.extra_dev_dependency {
        Some(dep) => {
            let deps = top
                .entry("devDependencies")
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .ok_or(ManifestError::UnexpectedShape("devDependencies"))?;
            // A version the user pinned themselves wins
            if !deps.contains_key(dep.name) {
                deps.insert(dep.name.to_string(), Value::String(dep.version.to_string()));
            }
        }
        None => {
            if let Some(deps) = top
                .get_mut("devDependencies")
                .and_then(Value::as_object_mut)
            {
                deps.remove(PARALLEL_WATCHER);
            }
        }
    }
    Ok(())
}

/// Read, patch, and rewrite the project's `package.json`.
///
/// The file is written only after a successful patch, so a parse failure
/// leaves it byte-for-byte intact.
pub async fn patch_file(root: &Path, plan: &LayoutPlan) -> Result<(), ManifestError> {
    let path = root.join(MANIFEST_FILE);
    let text = fs::read_to_string(&path)
        .await
        .map_err(|e| ManifestError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

    let patched = patch(plan, &text)?;

    fs::write(&path, patched)
        .await
        .map_err(|e| ManifestError::Write {
            path: path.display().to_string(),
            source: e,
        })
}
