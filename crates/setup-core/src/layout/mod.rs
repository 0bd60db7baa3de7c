//! Topology resolution and the resulting layout plan
//!
//! This module provides:
//! - The plan value types (LayoutPlan, PlannedFile, FileKind)
//! - The resolver turning a validated SetupRequest into a LayoutPlan
//!
//! Everything downstream (materialization, manifest patching, verification,
//! guidance text) consumes the single resolved plan instead of re-matching
//! on the topology.

pub mod plan;
pub mod topology;

pub use plan::{
    Dependency, FileKind, LayoutPlan, PlannedFile, SharedLayout, TargetLayout, Topology,
    PARALLEL_WATCHER, PARALLEL_WATCHER_VERSION,
};
pub use topology::{resolve, ConfigError, SetupRequest};
