use thiserror::Error;

use crate::topology::NodeId;

/// Top-level error type for skeleton analysis.
#[derive(Debug, Error)]
pub enum PlanariaError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("failed to read diagram: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while decoding the diagram text format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("malformed diagram: {section} section, line {line}: {reason}")]
    MalformedDiagram {
        section: &'static str,
        line: usize,
        reason: String,
    },

    #[error("unknown diagram kind: {0:?}")]
    UnknownDiagramKind(String),
}

impl FormatError {
    pub(crate) fn malformed(section: &'static str, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedDiagram {
            section,
            line,
            reason: reason.into(),
        }
    }
}

/// Errors related to skeleton graph construction.
#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    #[error("edge {edge} references unknown node {node}")]
    DanglingEdgeReference { edge: usize, node: NodeId },

    #[error("node id {0} appears more than once")]
    DuplicateNode(NodeId),

    #[error("edge {edge} endpoint ({x}, {y}) matches no node")]
    UnmatchedEdgeEndpoint { edge: usize, x: f64, y: f64 },
}

/// Errors related to profile geometry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}

/// Convenience type alias for results using [`PlanariaError`].
pub type Result<T> = std::result::Result<T, PlanariaError>;
