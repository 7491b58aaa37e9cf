//! Topological ordering of activity networks using Kahn's algorithm.

use std::collections::VecDeque;
use thiserror::Error;

use crate::models::{ActivityNetwork, NodeId};

/// Errors raised while ordering a network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// The network contains at least one dependency cycle. Detected
    /// structurally: the ordering failed to cover every node.
    #[error("Dependency cycle detected: ordered {ordered} of {node_count} nodes")]
    CycleDetected { ordered: usize, node_count: usize },
}

/// Compute a topological ordering of the network's nodes.
///
/// Uses Kahn's algorithm: nodes enter a FIFO frontier as their in-degree
/// drops to zero. The frontier is seeded with zero-in-degree nodes in
/// ascending index order and successors enter in edge order, so the
/// result is deterministic for a given network.
///
/// Returns an ordering containing every node exactly once, with each
/// node preceding all of its successors. Fails with
/// [`OrderingError::CycleDetected`] if the network is not acyclic.
/// Runs in O(V + E) time with O(V) auxiliary space.
pub fn topological_order(network: &ActivityNetwork) -> Result<Vec<NodeId>, OrderingError> {
    let node_count = network.node_count();

    // In-degree of every node, from a single scan of all activities
    let mut in_degree = vec![0usize; node_count];
    for node in 0..node_count {
        for activity in network.activities(node as NodeId) {
            in_degree[activity.to as usize] += 1;
        }
    }

    // Frontier of nodes with no unresolved predecessors
    let mut frontier: VecDeque<NodeId> = (0..node_count as NodeId)
        .filter(|&node| in_degree[node as usize] == 0)
        .collect();

    let mut order: Vec<NodeId> = Vec::with_capacity(node_count);

    while let Some(node) = frontier.pop_front() {
        order.push(node);

        for activity in network.activities(node) {
            let succ = activity.to as usize;
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                frontier.push_back(activity.to);
            }
        }
    }

    if order.len() != node_count {
        return Err(OrderingError::CycleDetected {
            ordered: order.len(),
            node_count,
        });
    }

    Ok(order)
}
