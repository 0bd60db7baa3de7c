//! Setup Core - Engine for wiring Tailwind CSS into WordPress projects
//!
//! This library scaffolds the build configuration and directory layout for
//! a Tailwind CSS pipeline inside an existing WordPress tree. The user
//! picks one of four mutually exclusive topologies, and everything else is
//! derived from that choice:
//!
//! - **Both** - separate compile pipelines for a theme and a plugin
//! - **ThemeOnly** / **PluginOnly** - a single pipeline for one target
//! - **Shared** - one compiled stylesheet consumed by both
//!
//! # Architecture
//!
//! The engine runs as a fixed sequence of components, each consuming the
//! output of the previous one:
//!
//! 1. **validate** - pure checks on user-supplied names and paths
//! 2. **layout** - resolves the topology plus validated inputs into an
//!    immutable [`LayoutPlan`] enumerating every directory, file, and
//!    build command
//! 3. **materialize** / **manifest** - apply the plan to the file system
//!    and to `package.json` (order-independent; both read the same plan)
//! 4. **verify** - re-reads the tree and reports an artifact checklist
//!
//! Every write is idempotent: reruns are safe, and files the user owns are
//! never overwritten.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive prompts
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use setup_core::{layout, materialize, SetupRequest, Topology};
//! use setup_core::validate::validate_folder_name;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut request = SetupRequest::new(Topology::ThemeOnly);
//! request.theme_name = Some(validate_folder_name("my-theme")?);
//!
//! let plan = layout::resolve(&request)?;
//! let report = materialize::apply(std::path::Path::new("."), &plan).await;
//! assert!(report.is_clean());
//! # Ok(())
//! # }
//! ```

pub mod cleanup;
pub mod content;
pub mod install;
pub mod layout;
pub mod manifest;
pub mod materialize;
pub mod project;
pub mod runtime;
pub mod validate;
pub mod verify;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use layout::{resolve, ConfigError, LayoutPlan, SetupRequest, Topology};
pub use materialize::{apply, ArtifactStatus, MaterializationReport};
pub use project::{ensure_wordpress_root, PreconditionFailure};
pub use validate::{validate_css_path, validate_folder_name, validate_path, InvalidInput};
pub use verify::{verify, ChecklistReport};

#[cfg(feature = "tui")]
pub use tui::{run_cleanup, run_setup, CleanupArgs, SetupArgs};
