//! Runtime detection for Node.js and npm
//!
//! Setup only needs the npm toolchain for the dependency-install step and
//! the generated watch scripts, so every check here is advisory: a missing
//! or old runtime produces a warning, never a failure.

use semver::Version;
use std::process::Command;

/// Minimum recommended Node.js major version
pub const MIN_NODE_MAJOR: u64 = 18;

/// Minimum recommended npm major version
pub const MIN_NPM_MAJOR: u64 = 9;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", "npm")
}

/// Parse a reported version, tolerating a leading `v` (`v22.1.0`).
fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned).ok()
}

/// Warning text when a runtime is missing or below its recommended major
/// version; `None` when everything looks fine (or the version string is
/// unparseable, in which case there is nothing useful to say).
pub fn version_advisory(info: &RuntimeInfo, min_major: u64) -> Option<String> {
    if !info.available {
        return Some(format!(
            "{} was not found. The generated npm scripts need it to run.",
            info.name
        ));
    }
    let version = parse_version(info.version.as_deref()?)?;
    if version.major < min_major {
        Some(format!(
            "{} {} detected. Recommended: v{}.0.0 or higher.",
            info.name, version, min_major
        ))
    } else {
        None
    }
}

/// Advisories for the full npm toolchain, in display order.
pub fn toolchain_advisories() -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(w) = version_advisory(&check_node(), MIN_NODE_MAJOR) {
        warnings.push(w);
    }
    if let Some(w) = version_advisory(&check_npm(), MIN_NPM_MAJOR) {
        warnings.push(w);
    }
    warnings
}
