//! Critical path analysis over activity networks.
//!
//! Performs DAG longest-path relaxation in topological order, then
//! reconstructs the maximal-duration path from recorded predecessors.
//! The critical path determines the minimum overall project duration.

use thiserror::Error;

use crate::models::{ActivityNetwork, NodeId};
use crate::ordering::{topological_order, OrderingError};
use crate::{log_changes, log_checks, log_debug};

/// Configuration for critical path analysis.
#[derive(Clone, Debug, Default)]
pub struct AnalysisConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

/// Errors raised during critical path analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CriticalPathError {
    /// The network is not acyclic; surfaced unchanged from the orderer.
    #[error(transparent)]
    Cycle(#[from] OrderingError),
    /// The start node is not a valid index - malformed caller input.
    #[error("Start node {start} out of range for network of {node_count} nodes")]
    StartOutOfRange { start: NodeId, node_count: usize },
}

/// Result of a critical path analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct CriticalPathResult {
    /// Nodes on the longest-duration path, start node first.
    pub path: Vec<NodeId>,
    /// Total duration along the path.
    pub total_duration: f64,
}

/// Relax one activity `from -> to`: adopt the longer cumulative duration.
///
/// This is a maximization relaxation. A node's distance only ever grows,
/// and its predecessor is updated in lock-step with its distance.
fn relax(
    from: NodeId,
    to: NodeId,
    duration: f64,
    distances: &mut [f64],
    predecessors: &mut [Option<NodeId>],
) -> bool {
    let candidate = distances[from as usize] + duration;
    if distances[to as usize] < candidate {
        distances[to as usize] = candidate;
        predecessors[to as usize] = Some(from);
        return true;
    }
    false
}

/// Compute the critical path of a network from a start node.
///
/// Equivalent to [`critical_path_with_config`] with the default
/// (silent) configuration.
pub fn critical_path(
    network: &ActivityNetwork,
    start: NodeId,
) -> Result<CriticalPathResult, CriticalPathError> {
    critical_path_with_config(network, start, &AnalysisConfig::default())
}

/// Compute the critical path of a network from a start node.
///
/// Relaxes every activity exactly once, processing nodes in topological
/// order: each node's distance is final by the time it is used as a
/// source, so a single O(V + E) pass suffices. The terminal node is the
/// node with the maximum finite distance from the start, ties going to
/// the lowest index; the path is reconstructed by walking predecessor
/// links back to the start.
///
/// Nodes unreachable from `start` keep a distance of negative infinity
/// and are never selected as the terminal. A start node with nothing
/// reachable yields the singleton path `[start]` with duration zero.
pub fn critical_path_with_config(
    network: &ActivityNetwork,
    start: NodeId,
    config: &AnalysisConfig,
) -> Result<CriticalPathResult, CriticalPathError> {
    let node_count = network.node_count();
    if start as usize >= node_count {
        return Err(CriticalPathError::StartOutOfRange { start, node_count });
    }

    // Longest known cumulative duration from the start; only the start
    // itself is reachable initially
    let mut distances = vec![f64::NEG_INFINITY; node_count];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
    distances[start as usize] = 0.0;

    let order = topological_order(network)?;

    for &node in &order {
        for activity in network.activities(node) {
            if relax(
                node,
                activity.to,
                activity.duration,
                &mut distances,
                &mut predecessors,
            ) {
                log_debug!(
                    config.verbosity,
                    "relaxed {} -> {}: distance[{}] = {}",
                    node,
                    activity.to,
                    activity.to,
                    distances[activity.to as usize]
                );
            }
        }
    }

    // Terminal node: maximum finite distance, lowest index on ties
    let mut terminal = start;
    let mut best = f64::NEG_INFINITY;
    for node in 0..node_count as NodeId {
        let distance = distances[node as usize];
        if distance.is_finite() {
            log_checks!(config.verbosity, "node {} at distance {}", node, distance);
        }
        if distance.is_finite() && distance > best {
            best = distance;
            terminal = node;
        }
    }

    log_changes!(
        config.verbosity,
        "terminal node {} at distance {}",
        terminal,
        distances[terminal as usize]
    );

    // Walk predecessor links back to the start, then reverse
    let mut path = Vec::new();
    let mut current = Some(terminal);
    while let Some(node) = current {
        path.push(node);
        current = predecessors[node as usize];
    }
    path.reverse();

    Ok(CriticalPathResult {
        path,
        total_duration: distances[terminal as usize],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(node_count: usize, activities: &[(NodeId, NodeId, f64)]) -> ActivityNetwork {
        let mut network = ActivityNetwork::with_nodes(node_count);
        for &(from, to, duration) in activities {
            network.add_activity(from, to, duration).unwrap();
        }
        network
    }

    /// The reference PERT network: 8 nodes, critical path 0-1-3-6-7.
    fn pert_network() -> ActivityNetwork {
        weighted(
            8,
            &[
                (0, 1, 3.0),
                (0, 2, 2.0),
                (1, 3, 4.0),
                (1, 4, 2.0),
                (2, 4, 3.0),
                (2, 5, 1.0),
                (3, 6, 5.0),
                (4, 6, 2.0),
                (4, 7, 4.0),
                (5, 7, 3.0),
                (6, 7, 6.0),
            ],
        )
    }

    #[test]
    fn test_pert_reference_network() {
        let result = critical_path(&pert_network(), 0).unwrap();
        assert_eq!(result.path, vec![0, 1, 3, 6, 7]);
        assert!((result.total_duration - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_path_consistent_with_activities() {
        // Each consecutive pair on the path must be connected by an
        // activity, and the durations along it must sum to the total.
        let network = pert_network();
        let result = critical_path(&network, 0).unwrap();

        let mut total = 0.0;
        for pair in result.path.windows(2) {
            let activity = network
                .activities(pair[0])
                .iter()
                .find(|a| a.to == pair[1])
                .expect("path nodes must be connected");
            total += activity.duration;
        }
        assert!((total - result.total_duration).abs() < 1e-9);
    }

    #[test]
    fn test_diamond_picks_longer_branch() {
        // 0 -> 1 -> 3 sums to 2, 0 -> 2 -> 3 sums to 11
        let network = weighted(4, &[(0, 1, 1.0), (0, 2, 10.0), (1, 3, 1.0), (2, 3, 1.0)]);
        let result = critical_path(&network, 0).unwrap();
        assert_eq!(result.path, vec![0, 2, 3]);
        assert!((result.total_duration - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_node() {
        let network = ActivityNetwork::with_nodes(1);
        let result = critical_path(&network, 0).unwrap();
        assert_eq!(result.path, vec![0]);
        assert_eq!(result.total_duration, 0.0);
    }

    #[test]
    fn test_nothing_reachable_from_start() {
        // Activities exist, but none start from node 2
        let network = weighted(3, &[(0, 1, 5.0)]);
        let result = critical_path(&network, 2).unwrap();
        assert_eq!(result.path, vec![2]);
        assert_eq!(result.total_duration, 0.0);
    }

    #[test]
    fn test_unreachable_nodes_never_terminal() {
        // Node 3 hangs off node 2, which is unreachable from the start
        let network = weighted(4, &[(0, 1, 1.0), (2, 3, 100.0)]);
        let result = critical_path(&network, 0).unwrap();
        assert_eq!(result.path, vec![0, 1]);
        assert!((result.total_duration - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_terminal_tie_breaks_to_lowest_index() {
        // Both branches reach distance 5; node 1 wins over node 2
        let network = weighted(3, &[(0, 1, 5.0), (0, 2, 5.0)]);
        let result = critical_path(&network, 0).unwrap();
        assert_eq!(result.path, vec![0, 1]);
        assert!((result.total_duration - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_ties_keep_start() {
        // All reachable distances are 0; the start is the lowest index
        let network = weighted(2, &[(0, 1, 0.0)]);
        let result = critical_path(&network, 0).unwrap();
        assert_eq!(result.path, vec![0]);
        assert_eq!(result.total_duration, 0.0);
    }

    #[test]
    fn test_cycle_propagates_unchanged() {
        let network = weighted(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
        assert_eq!(
            critical_path(&network, 0),
            Err(CriticalPathError::Cycle(OrderingError::CycleDetected {
                ordered: 0,
                node_count: 3
            }))
        );
    }

    #[test]
    fn test_start_out_of_range() {
        let network = ActivityNetwork::with_nodes(2);
        assert_eq!(
            critical_path(&network, 9),
            Err(CriticalPathError::StartOutOfRange {
                start: 9,
                node_count: 2
            })
        );
    }

    #[test]
    fn test_start_mid_network() {
        // Starting from node 1 ignores the longer prefix through node 0
        let network = weighted(4, &[(0, 1, 10.0), (1, 2, 2.0), (2, 3, 3.0)]);
        let result = critical_path(&network, 1).unwrap();
        assert_eq!(result.path, vec![1, 2, 3]);
        assert!((result.total_duration - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_verbose_config_matches_silent() {
        let config = AnalysisConfig { verbosity: 3 };
        let network = pert_network();
        let verbose = critical_path_with_config(&network, 0, &config).unwrap();
        let silent = critical_path(&network, 0).unwrap();
        assert_eq!(verbose, silent);
    }
}
