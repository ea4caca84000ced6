use serde::{Deserialize, Serialize};

use crate::math::Point;
use crate::topology::NodeId;

/// A polygon outline in drawing order. The closing point is not repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonRecord {
    pub points: Vec<Point>,
}

impl PolygonRecord {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// One skeleton or Voronoi edge with the inscribed radius at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub first_point: Point,
    pub second_point: Point,
    /// Control point of a curved (parabolic) edge; `None` for straight edges.
    pub virtual_point: Option<Point>,
    /// Radius at `first_point` and at `second_point`.
    pub radii: (f64, f64),
}

impl EdgeRecord {
    /// Creates a straight edge.
    #[must_use]
    pub fn straight(first_point: Point, second_point: Point, radii: (f64, f64)) -> Self {
        Self {
            first_point,
            second_point,
            virtual_point: None,
            radii,
        }
    }

    /// Creates a curved edge with a virtual control point.
    #[must_use]
    pub fn curved(
        first_point: Point,
        second_point: Point,
        virtual_point: Point,
        radii: (f64, f64),
    ) -> Self {
        Self {
            first_point,
            second_point,
            virtual_point: Some(virtual_point),
            radii,
        }
    }

    /// Returns `true` if the edge carries a virtual control point.
    #[must_use]
    pub fn is_curved(&self) -> bool {
        self.virtual_point.is_some()
    }
}

/// A skeleton point with its local half-thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Zero-based position of the node within its section.
    pub id: NodeId,
    pub point: Point,
    pub radius: f64,
}

impl NodeRecord {
    #[must_use]
    pub fn new(id: NodeId, point: Point, radius: f64) -> Self {
        Self { id, point, radius }
    }

    /// The `(point, radius)` pair consumed by path straightening.
    #[must_use]
    pub fn sample(&self) -> (Point, f64) {
        (self.point, self.radius)
    }
}

/// Contents of a Voronoi diagram file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VoronoiDiagram {
    pub polygons: Vec<PolygonRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Contents of a skeleton diagram file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkeletonDiagram {
    pub polygons: Vec<PolygonRecord>,
    pub edges: Vec<EdgeRecord>,
    pub nodes: Vec<NodeRecord>,
}

/// Contents of a skeleton-path file: the pruned skeleton plus the ordered
/// node sequence of its main path.
///
/// A file without section separators carries only the terminal count; all
/// collections are then empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkeletonPathDiagram {
    pub terminal_count: usize,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub path: Vec<NodeRecord>,
}

/// A parsed diagram of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Diagram {
    Voronoi(VoronoiDiagram),
    Skeleton(SkeletonDiagram),
    SkeletonPath(SkeletonPathDiagram),
}

impl Diagram {
    /// The kind this diagram was parsed as.
    #[must_use]
    pub fn kind(&self) -> super::DiagramKind {
        match self {
            Self::Voronoi(_) => super::DiagramKind::Voronoi,
            Self::Skeleton(_) => super::DiagramKind::Skeleton,
            Self::SkeletonPath(_) => super::DiagramKind::SkeletonPath,
        }
    }

    /// Polygons of the diagram; empty for skeleton-path files.
    #[must_use]
    pub fn polygons(&self) -> &[PolygonRecord] {
        match self {
            Self::Voronoi(d) => &d.polygons,
            Self::Skeleton(d) => &d.polygons,
            Self::SkeletonPath(_) => &[],
        }
    }

    /// Edges of the diagram.
    #[must_use]
    pub fn edges(&self) -> &[EdgeRecord] {
        match self {
            Self::Voronoi(d) => &d.edges,
            Self::Skeleton(d) => &d.edges,
            Self::SkeletonPath(d) => &d.edges,
        }
    }

    /// Skeleton nodes of the diagram; empty for Voronoi files.
    #[must_use]
    pub fn nodes(&self) -> &[NodeRecord] {
        match self {
            Self::Voronoi(_) => &[],
            Self::Skeleton(d) => &d.nodes,
            Self::SkeletonPath(d) => &d.nodes,
        }
    }
}
