//! Reader for the delimiter-based diagram text format.
//!
//! A file is a sequence of sections separated by four newlines. Which sections
//! appear, and in which order, depends on the [`DiagramKind`]:
//!
//! ```text
//! voronoi        POLYGONS | EDGES
//! skeleton       POLYGONS | EDGES | nodes
//! skeleton_path  header   | nodes | EDGES | path nodes
//! ```
//!
//! A skeleton-path file without any section separator holds only the header
//! and describes a specimen with no detected skeleton.

mod records;
mod sections;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use records::{
    Diagram, EdgeRecord, NodeRecord, PolygonRecord, SkeletonDiagram, SkeletonPathDiagram,
    VoronoiDiagram,
};
pub use sections::{EDGES_HEADER, NODES_HEADER, POLYGONS_HEADER};

use sections::{
    parse_edges, parse_nodes, parse_polygons, parse_terminal_count, split_numbered, Section,
};

use crate::error::{FormatError, Result};

/// The kinds of diagram file the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    /// Polygons and Voronoi edges.
    Voronoi,
    /// Polygons, skeleton edges and skeleton nodes.
    Skeleton,
    /// Terminal count, pruned skeleton and the ordered main path.
    SkeletonPath,
}

impl DiagramKind {
    /// Canonical textual name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Voronoi => "voronoi",
            Self::Skeleton => "skeleton",
            Self::SkeletonPath => "skeleton_path",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiagramKind {
    type Err = FormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "voronoi" => Ok(Self::Voronoi),
            "skeleton" => Ok(Self::Skeleton),
            "skeleton_path" | "skeleton_way" => Ok(Self::SkeletonPath),
            other => Err(FormatError::UnknownDiagramKind(other.to_owned())),
        }
    }
}

/// Separators and strictness settings for the reader.
///
/// The defaults reproduce the format exactly as the skeleton tooling writes
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Separator between top-level sections.
    pub section_separator: String,
    /// Separator between polygons inside the polygon section.
    pub polygon_separator: String,
    /// Separator between the points of one polygon.
    pub point_separator: String,
    /// Separator between edge lines and node lines.
    pub line_separator: String,
    /// Separator between the geometry and the radius part of a line.
    pub radius_separator: String,
    /// Check that every node section starts with a `NODES` header line
    /// instead of skipping the first line unconditionally.
    pub require_node_header: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            section_separator: "\n\n\n\n".to_owned(),
            polygon_separator: "\n\n".to_owned(),
            point_separator: "\n".to_owned(),
            line_separator: "\n".to_owned(),
            radius_separator: "\t".to_owned(),
            require_node_header: false,
        }
    }
}

impl ParseOptions {
    /// Sets the top-level section separator.
    #[must_use]
    pub fn with_section_separator(mut self, separator: impl Into<String>) -> Self {
        self.section_separator = separator.into();
        self
    }

    /// Sets the separator between the geometry and the radius part of a line.
    #[must_use]
    pub fn with_radius_separator(mut self, separator: impl Into<String>) -> Self {
        self.radius_separator = separator.into();
        self
    }

    /// Enables or disables validation of the `NODES` header line.
    #[must_use]
    pub fn with_required_node_header(mut self, required: bool) -> Self {
        self.require_node_header = required;
        self
    }
}

fn split_sections<'a>(
    raw: &'a str,
    options: &ParseOptions,
    names: &[&'static str],
    kind: DiagramKind,
) -> std::result::Result<Vec<Section<'a>>, FormatError> {
    let pieces = split_numbered(raw, &options.section_separator, 1);
    if pieces.len() != names.len() {
        return Err(FormatError::malformed(
            "diagram",
            1,
            format!(
                "{kind} diagram needs {} sections, found {}",
                names.len(),
                pieces.len()
            ),
        ));
    }
    Ok(pieces
        .into_iter()
        .zip(names)
        .map(|((first_line, text), &name)| Section {
            name,
            text,
            first_line,
        })
        .collect())
}

/// Parses a Voronoi diagram.
///
/// # Errors
///
/// Returns `FormatError::MalformedDiagram` on any section-count, header,
/// arity or numeric error.
pub fn parse_voronoi(raw: &str, options: &ParseOptions) -> Result<VoronoiDiagram> {
    let sections = split_sections(raw, options, &["polygons", "edges"], DiagramKind::Voronoi)?;
    let diagram = VoronoiDiagram {
        polygons: parse_polygons(sections[0], options)?,
        edges: parse_edges(sections[1], options)?,
    };
    tracing::debug!(
        polygons = diagram.polygons.len(),
        edges = diagram.edges.len(),
        "parsed voronoi diagram"
    );
    Ok(diagram)
}

/// Parses a skeleton diagram.
///
/// # Errors
///
/// Returns `FormatError::MalformedDiagram` on any section-count, header,
/// arity or numeric error.
pub fn parse_skeleton(raw: &str, options: &ParseOptions) -> Result<SkeletonDiagram> {
    let sections = split_sections(
        raw,
        options,
        &["polygons", "edges", "nodes"],
        DiagramKind::Skeleton,
    )?;
    let diagram = SkeletonDiagram {
        polygons: parse_polygons(sections[0], options)?,
        edges: parse_edges(sections[1], options)?,
        nodes: parse_nodes(sections[2], options)?,
    };
    tracing::debug!(
        polygons = diagram.polygons.len(),
        edges = diagram.edges.len(),
        nodes = diagram.nodes.len(),
        "parsed skeleton diagram"
    );
    Ok(diagram)
}

/// Parses a skeleton-path diagram.
///
/// Text without any section separator is read as a header-only file: the
/// terminal count is returned with empty node, edge and path collections.
///
/// # Errors
///
/// Returns `FormatError::MalformedDiagram` on any section-count, header,
/// arity or numeric error.
pub fn parse_skeleton_path(raw: &str, options: &ParseOptions) -> Result<SkeletonPathDiagram> {
    if !raw.contains(options.section_separator.as_str()) {
        let header = Section {
            name: "header",
            text: raw,
            first_line: 1,
        };
        let terminal_count = parse_terminal_count(header, options)?;
        tracing::debug!(terminal_count, "parsed header-only skeleton path");
        return Ok(SkeletonPathDiagram {
            terminal_count,
            ..SkeletonPathDiagram::default()
        });
    }

    let sections = split_sections(
        raw,
        options,
        &["header", "nodes", "edges", "path"],
        DiagramKind::SkeletonPath,
    )?;
    let diagram = SkeletonPathDiagram {
        terminal_count: parse_terminal_count(sections[0], options)?,
        nodes: parse_nodes(sections[1], options)?,
        edges: parse_edges(sections[2], options)?,
        path: parse_nodes(sections[3], options)?,
    };
    tracing::debug!(
        terminal_count = diagram.terminal_count,
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        path = diagram.path.len(),
        "parsed skeleton path"
    );
    Ok(diagram)
}

/// Parses `raw` as a diagram of the requested kind.
///
/// # Errors
///
/// Returns `FormatError::MalformedDiagram` if the text does not follow the
/// grammar of `kind`.
pub fn parse_diagram(raw: &str, kind: DiagramKind, options: &ParseOptions) -> Result<Diagram> {
    Ok(match kind {
        DiagramKind::Voronoi => Diagram::Voronoi(parse_voronoi(raw, options)?),
        DiagramKind::Skeleton => Diagram::Skeleton(parse_skeleton(raw, options)?),
        DiagramKind::SkeletonPath => Diagram::SkeletonPath(parse_skeleton_path(raw, options)?),
    })
}

/// Reads a whole diagram file into memory and parses it.
///
/// # Errors
///
/// Returns `PlanariaError::Io` if the file cannot be read and a format error
/// if its contents are malformed.
pub fn read_diagram(
    path: impl AsRef<Path>,
    kind: DiagramKind,
    options: &ParseOptions,
) -> Result<Diagram> {
    let raw = read_text(path.as_ref(), kind)?;
    parse_diagram(&raw, kind, options)
}

/// Reads a diagram file of the given kind fully into memory.
pub(crate) fn read_text(path: &Path, kind: DiagramKind) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), %kind, bytes = raw.len(), "read diagram file");
    Ok(raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanariaError;
    use crate::math::Point;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn kind_from_name() {
        assert_eq!("voronoi".parse::<DiagramKind>().unwrap(), DiagramKind::Voronoi);
        assert_eq!(
            "skeleton_way".parse::<DiagramKind>().unwrap(),
            DiagramKind::SkeletonPath
        );
        assert!(matches!(
            "mesh".parse::<DiagramKind>(),
            Err(FormatError::UnknownDiagramKind(_))
        ));
        assert_eq!(DiagramKind::SkeletonPath.to_string(), "skeleton_path");
    }

    #[test]
    fn minimal_voronoi_field_for_field() {
        let raw = "POLYGONS\n\n1.5 2.5\n\n\n\nEDGES\n0 0 3 4\t1 2";
        let diagram = parse_voronoi(raw, &ParseOptions::default()).unwrap();
        assert_eq!(
            diagram,
            VoronoiDiagram {
                polygons: vec![PolygonRecord::new(vec![p(1.5, 2.5)])],
                edges: vec![EdgeRecord {
                    first_point: p(0.0, 0.0),
                    second_point: p(3.0, 4.0),
                    virtual_point: None,
                    radii: (1.0, 2.0),
                }],
            }
        );
    }

    #[test]
    fn voronoi_wrong_section_count() {
        let err = parse_voronoi("POLYGONS\n\n1 2", &ParseOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            PlanariaError::Format(FormatError::MalformedDiagram {
                section: "diagram",
                ..
            })
        ));
    }

    #[test]
    fn voronoi_five_token_edge_is_rejected() {
        let raw = "POLYGONS\n\n1 2\n\n\n\nEDGES\n0 0 3 4 5\t1 2";
        let err = parse_voronoi(raw, &ParseOptions::default()).unwrap_err();
        match err {
            PlanariaError::Format(FormatError::MalformedDiagram { section, line, .. }) => {
                assert_eq!(section, "edges");
                assert_eq!(line, 8);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn skeleton_three_sections() {
        let raw = "POLYGONS\n\n0 0\n4 0\n4 4\n\n\n\nEDGES\n1 1 3 3\t1 1\n\n\n\nNODES\n1 1\t1\n3 3\t1";
        let diagram = parse_skeleton(raw, &ParseOptions::default()).unwrap();
        assert_eq!(diagram.polygons[0].points.len(), 3);
        assert_eq!(diagram.edges.len(), 1);
        assert_eq!(diagram.nodes.len(), 2);
        assert_eq!(diagram.nodes[1].id, 1);
    }

    #[test]
    fn skeleton_path_full() {
        let raw = "TERMINALS\n2\n\n\n\nNODES\n0 0\t1\n3 4\t2\n\n\n\nEDGES\n0 0 3 4\t1 2\n\n\n\nPATH\n0 0\t1\n3 4\t2\n";
        let diagram = parse_skeleton_path(raw, &ParseOptions::default()).unwrap();
        assert_eq!(diagram.terminal_count, 2);
        assert_eq!(diagram.nodes.len(), 2);
        assert_eq!(diagram.edges.len(), 1);
        assert_eq!(diagram.path.len(), 2);
        assert_eq!(diagram.path[1].point, p(3.0, 4.0));
    }

    #[test]
    fn skeleton_path_header_only() {
        let diagram = parse_skeleton_path("TERMINALS\n0\n", &ParseOptions::default()).unwrap();
        assert_eq!(diagram.terminal_count, 0);
        assert!(diagram.nodes.is_empty());
        assert!(diagram.path.is_empty());
    }

    #[test]
    fn skeleton_path_wrong_section_count() {
        let raw = "TERMINALS\n2\n\n\n\nNODES\n0 0\t1";
        assert!(parse_skeleton_path(raw, &ParseOptions::default()).is_err());
    }

    #[test]
    fn custom_separators() {
        let options = ParseOptions::default()
            .with_section_separator("\n---\n")
            .with_radius_separator("|");
        let raw = "POLYGONS\n\n1 2\n---\nEDGES\n0 0 1 1|0.5 0.5";
        let diagram = parse_diagram(raw, DiagramKind::Voronoi, &options).unwrap();
        assert_eq!(diagram.kind(), DiagramKind::Voronoi);
        assert_eq!(diagram.edges().len(), 1);
        assert!(diagram.nodes().is_empty());
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let err = read_diagram(
            "/nonexistent/planaria/diagram.txt",
            DiagramKind::Voronoi,
            &ParseOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanariaError::Io(_)));
    }
}
