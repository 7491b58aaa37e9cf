//! Rust implementation of activity-network analysis algorithms.
//!
//! This crate computes topological orderings and critical paths
//! (longest-duration paths) over project activity networks modeled as
//! weighted DAGs, as in a PERT diagram.

pub mod critical_path;
pub mod logging;
mod models;
pub mod ordering;

#[cfg(feature = "python")]
mod python;

pub use critical_path::{
    critical_path, critical_path_with_config, AnalysisConfig, CriticalPathError,
    CriticalPathResult,
};
pub use models::{Activity, ActivityNetwork, NetworkError, NodeId};
pub use ordering::{topological_order, OrderingError};
