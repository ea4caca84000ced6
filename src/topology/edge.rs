use super::NodeId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in a skeleton graph.
    pub struct EdgeId;
}

/// An undirected skeleton edge between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonEdge {
    pub first: NodeId,
    pub second: NodeId,
}

impl SkeletonEdge {
    #[must_use]
    pub fn new(first: NodeId, second: NodeId) -> Self {
        Self { first, second }
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an
    /// endpoint of this edge.
    #[must_use]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.first {
            Some(self.second)
        } else if node == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}
