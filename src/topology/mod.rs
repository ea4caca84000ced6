pub mod edge;

pub use edge::{EdgeId, SkeletonEdge};

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use slotmap::SlotMap;

use crate::error::TopologyError;
use crate::format::{EdgeRecord, NodeRecord};
use crate::math::Point;

/// Identifier of a skeleton node, unique within one diagram.
pub type NodeId = usize;

/// Skeleton graph built once from parsed records.
///
/// Nodes are owned in a map keyed by their file id and edges live in an arena.
/// Edges refer to nodes by id only; the node-to-edge incidence index is derived
/// after all edges are inserted, so there are no ownership cycles and the
/// graph is never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct SkeletonGraph {
    nodes: HashMap<NodeId, NodeRecord>,
    edges: SlotMap<EdgeId, SkeletonEdge>,
    incident: HashMap<NodeId, Vec<EdgeId>>,
}

impl SkeletonGraph {
    /// Builds a graph from nodes and id-pair edges.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::DuplicateNode` if two nodes share an id and
    /// `TopologyError::DanglingEdgeReference` if an edge names an unknown id.
    pub fn build(nodes: &[NodeRecord], edges: &[(NodeId, NodeId)]) -> Result<Self, TopologyError> {
        let mut node_map = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if node_map.insert(node.id, *node).is_some() {
                return Err(TopologyError::DuplicateNode(node.id));
            }
        }

        let mut arena = SlotMap::with_capacity_and_key(edges.len());
        for (index, &(first, second)) in edges.iter().enumerate() {
            for node in [first, second] {
                if !node_map.contains_key(&node) {
                    return Err(TopologyError::DanglingEdgeReference { edge: index, node });
                }
            }
            arena.insert(SkeletonEdge::new(first, second));
        }

        let mut incident: HashMap<NodeId, Vec<EdgeId>> = HashMap::with_capacity(node_map.len());
        for (id, edge) in &arena {
            incident.entry(edge.first).or_default().push(id);
            incident.entry(edge.second).or_default().push(id);
        }

        tracing::debug!(
            nodes = node_map.len(),
            edges = arena.len(),
            "built skeleton graph"
        );

        Ok(Self {
            nodes: node_map,
            edges: arena,
            incident,
        })
    }

    /// Builds a graph from coordinate-based edge records, resolving each
    /// endpoint to the node at exactly the same point.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::UnmatchedEdgeEndpoint` if an endpoint coincides
    /// with no node, and `TopologyError::DuplicateNode` on repeated node ids.
    pub fn from_records(nodes: &[NodeRecord], edges: &[EdgeRecord]) -> Result<Self, TopologyError> {
        let mut by_point: HashMap<(u64, u64), NodeId> = HashMap::with_capacity(nodes.len());
        for node in nodes {
            by_point.entry(point_key(&node.point)).or_insert(node.id);
        }

        let resolve = |edge: usize, point: &Point| {
            by_point
                .get(&point_key(point))
                .copied()
                .ok_or(TopologyError::UnmatchedEdgeEndpoint {
                    edge,
                    x: point.x,
                    y: point.y,
                })
        };

        let pairs = edges
            .iter()
            .enumerate()
            .map(|(index, edge)| -> Result<(NodeId, NodeId), TopologyError> {
                Ok((
                    resolve(index, &edge.first_point)?,
                    resolve(index, &edge.second_point)?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::build(nodes, &pairs)
    }

    /// Returns the node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(&id)
    }

    /// Iterates over all nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.values()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the edge with the given id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&SkeletonEdge> {
        self.edges.get(id)
    }

    /// Iterates over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &SkeletonEdge)> {
        self.edges.iter()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges incident to `node`; empty for isolated or unknown nodes.
    #[must_use]
    pub fn incident_edges(&self, node: NodeId) -> &[EdgeId] {
        self.incident.get(&node).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.incident_edges(node).len()
    }

    /// A node is terminal iff exactly one edge is incident to it.
    #[must_use]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.degree(node) == 1
    }

    /// Ids of all terminal nodes, ascending.
    #[must_use]
    pub fn terminals(&self) -> Vec<NodeId> {
        let mut terminals: Vec<NodeId> = self
            .nodes
            .keys()
            .copied()
            .filter(|&id| self.is_terminal(id))
            .collect();
        terminals.sort_unstable();
        terminals
    }

    #[must_use]
    pub fn terminal_count(&self) -> usize {
        self.nodes.keys().filter(|&&id| self.is_terminal(id)).count()
    }

    /// Returns the node ids of a walk from `start` to `end` with the fewest
    /// edges, both ends included, or `None` if they are not connected.
    #[must_use]
    pub fn path_between(&self, start: NodeId, end: NodeId) -> Option<Vec<NodeId>> {
        if !self.nodes.contains_key(&start) || !self.nodes.contains_key(&end) {
            return None;
        }

        let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
        previous.insert(start, start);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if current == end {
                break;
            }
            for &edge_id in self.incident_edges(current) {
                let Some(next) = self.edges.get(edge_id).and_then(|e| e.other(current)) else {
                    continue;
                };
                if let Entry::Vacant(slot) = previous.entry(next) {
                    slot.insert(current);
                    queue.push_back(next);
                }
            }
        }

        if !previous.contains_key(&end) {
            return None;
        }
        let mut walk = vec![end];
        let mut current = end;
        while current != start {
            current = previous[&current];
            walk.push(current);
        }
        walk.reverse();
        Some(walk)
    }

    /// Maps node ids to their records, skipping unknown ids.
    #[must_use]
    pub fn path_records(&self, ids: &[NodeId]) -> Vec<NodeRecord> {
        ids.iter().filter_map(|id| self.nodes.get(id).copied()).collect()
    }
}

/// Hash key for exact point matching; `-0.0` and `0.0` compare equal.
fn point_key(point: &Point) -> (u64, u64) {
    let normalize = |v: f64| if v == 0.0 { 0.0_f64 } else { v };
    (normalize(point.x).to_bits(), normalize(point.y).to_bits())
}
