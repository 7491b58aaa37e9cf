//! Python bindings for the analysis entry points.

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rustc_hash::FxHashMap;

use crate::models::{ActivityNetwork, NodeId};

// Note: We use std HashMap here for PyO3 interface compatibility

/// Compute a topological ordering of an unweighted dependency graph.
///
/// # Arguments
/// * `graph` - Adjacency list: `graph[u]` holds every `v` with an edge `u -> v`
///
/// # Returns
/// * Node indices in topological order
///
/// # Raises
/// * ValueError if the graph has a cycle or an out-of-range edge target
#[pyfunction]
fn topological_order(graph: Vec<Vec<NodeId>>) -> PyResult<Vec<NodeId>> {
    let network = ActivityNetwork::from_successors(&graph)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    crate::ordering::topological_order(&network).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Compute the critical path of a weighted activity network.
///
/// # Arguments
/// * `graph` - Dict mapping each node to its `(successor, duration)` pairs
/// * `num_nodes` - Total node count; node indices are `0..num_nodes`
/// * `start` - Start node of the project
///
/// # Returns
/// * `(path, total_duration)` - the longest-duration path from `start` and its length
///
/// # Raises
/// * ValueError if the graph has a cycle, a malformed edge, or an invalid start
#[pyfunction]
fn critical_path(
    graph: HashMap<NodeId, Vec<(NodeId, f64)>>,
    num_nodes: usize,
    start: NodeId,
) -> PyResult<(Vec<NodeId>, f64)> {
    let map: FxHashMap<NodeId, Vec<(NodeId, f64)>> = graph.into_iter().collect();
    let network = ActivityNetwork::from_map(&map, num_nodes)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let result = crate::critical_path::critical_path(&network, start)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((result.path, result.total_duration))
}

/// The actnet.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(topological_order, m)?)?;
    m.add_function(wrap_pyfunction!(critical_path, m)?)?;
    Ok(())
}
