//! Core data types for activity networks.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Node identifier (u32 for compact storage and fast indexing).
pub type NodeId = u32;

/// Errors raised while building an activity network.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Node {node} out of range for network of {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },
    #[error("Negative duration {duration} on activity {from} -> {to}")]
    NegativeDuration {
        from: NodeId,
        to: NodeId,
        duration: f64,
    },
}

/// A directed activity from one node to another with a duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activity {
    /// Destination node.
    pub to: NodeId,
    /// Activity duration (non-negative).
    pub duration: f64,
}

/// A project activity network: a directed graph with non-negative
/// activity durations.
///
/// Nodes are contiguous indices in `[0, node_count)` and activities are
/// stored as per-node successor lists. Acyclicity is not enforced during
/// construction; it is checked structurally when an ordering is computed.
#[derive(Clone, Debug, Default)]
pub struct ActivityNetwork {
    successors: Vec<Vec<Activity>>,
}

impl ActivityNetwork {
    /// Create a network with `node_count` nodes and no activities.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); node_count],
        }
    }

    /// Add a weighted activity `from -> to`.
    ///
    /// Fails if either endpoint is out of range or the duration is
    /// negative. Activity durations model real task times, so negative
    /// values are treated as malformed caller input.
    pub fn add_activity(
        &mut self,
        from: NodeId,
        to: NodeId,
        duration: f64,
    ) -> Result<(), NetworkError> {
        let node_count = self.successors.len();
        for node in [from, to] {
            if node as usize >= node_count {
                return Err(NetworkError::NodeOutOfRange { node, node_count });
            }
        }
        if duration < 0.0 {
            return Err(NetworkError::NegativeDuration { from, to, duration });
        }
        self.successors[from as usize].push(Activity { to, duration });
        Ok(())
    }

    /// Add an unweighted precedence edge `from -> to` (zero duration).
    pub fn add_dependency(&mut self, from: NodeId, to: NodeId) -> Result<(), NetworkError> {
        self.add_activity(from, to, 0.0)
    }

    /// Build an unweighted network from per-node successor lists.
    pub fn from_successors(successors: &[Vec<NodeId>]) -> Result<Self, NetworkError> {
        let mut network = Self::with_nodes(successors.len());
        for (from, nodes) in successors.iter().enumerate() {
            for &to in nodes {
                network.add_dependency(from as NodeId, to)?;
            }
        }
        Ok(network)
    }

    /// Build a weighted network from a map keyed by node.
    ///
    /// Nodes absent from the map simply have no outgoing activities.
    pub fn from_map(
        map: &FxHashMap<NodeId, Vec<(NodeId, f64)>>,
        node_count: usize,
    ) -> Result<Self, NetworkError> {
        let mut network = Self::with_nodes(node_count);
        for (&from, activities) in map {
            for &(to, duration) in activities {
                network.add_activity(from, to, duration)?;
            }
        }
        Ok(network)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    /// Check if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Outgoing activities of a node.
    pub fn activities(&self, node: NodeId) -> &[Activity] {
        &self.successors[node as usize]
    }
}
