//! One analysed specimen: a skeleton-path file and everything derived from it.

use std::path::Path;

use crate::error::Result;
use crate::format::{
    parse_skeleton_path, read_text, DiagramKind, NodeRecord, ParseOptions, SkeletonPathDiagram,
};
use crate::geometry::SkeletonPath;
use crate::operations::creation::Straighten;
use crate::operations::matching::{diff_features, DiffFeatures};
use crate::operations::query::{ExtractFeatures, FeatureRow, ShapeFeatureSet};
use crate::topology::SkeletonGraph;

/// File-name suffix of skeleton-path files written by the skeleton tooling.
pub const SKELETON_PATH_SUFFIX: &str = "_skeleton_extra.txt";

/// A parsed skeleton-path file together with its straightened profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Specimen {
    diagram: SkeletonPathDiagram,
    path: SkeletonPath,
}

impl Specimen {
    /// Straightens the main path of an already parsed diagram.
    #[must_use]
    pub fn from_diagram(diagram: SkeletonPathDiagram) -> Self {
        let path = Straighten::new(diagram.path.iter().map(NodeRecord::sample)).execute();
        if path.is_empty() {
            tracing::debug!(
                terminal_count = diagram.terminal_count,
                "specimen has no skeleton path"
            );
        }
        Self { diagram, path }
    }

    /// Parses skeleton-path text.
    ///
    /// # Errors
    ///
    /// Returns a format error if the text is malformed.
    pub fn parse(raw: &str, options: &ParseOptions) -> Result<Self> {
        Ok(Self::from_diagram(parse_skeleton_path(raw, options)?))
    }

    /// Reads and parses a skeleton-path file.
    ///
    /// # Errors
    ///
    /// Returns `PlanariaError::Io` if the file cannot be read and a format
    /// error if it is malformed.
    pub fn from_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let raw = read_text(path.as_ref(), DiagramKind::SkeletonPath)?;
        Self::parse(&raw, options)
    }

    /// Terminal count from the file header.
    #[must_use]
    pub fn terminal_count(&self) -> usize {
        self.diagram.terminal_count
    }

    #[must_use]
    pub fn diagram(&self) -> &SkeletonPathDiagram {
        &self.diagram
    }

    #[must_use]
    pub fn path(&self) -> &SkeletonPath {
        &self.path
    }

    #[must_use]
    pub fn features(&self) -> ShapeFeatureSet {
        ExtractFeatures::new(&self.path, self.diagram.terminal_count).execute()
    }

    /// Feature table row for this specimen.
    #[must_use]
    pub fn feature_row(&self, sample: impl Into<String>, class_label: i64) -> FeatureRow {
        FeatureRow {
            sample: sample.into(),
            class_label,
            features: self.features(),
        }
    }

    /// Builds the pruned skeleton graph stored alongside the path.
    ///
    /// # Errors
    ///
    /// Returns a topology error if an edge endpoint matches no node.
    pub fn graph(&self) -> Result<SkeletonGraph> {
        let graph = SkeletonGraph::from_records(&self.diagram.nodes, &self.diagram.edges)?;
        let terminals = graph.terminal_count();
        if terminals != self.diagram.terminal_count {
            tracing::warn!(
                header = self.diagram.terminal_count,
                graph = terminals,
                "terminal count in header differs from skeleton graph"
            );
        }
        Ok(graph)
    }

    /// Compares this specimen's profile with another's.
    #[must_use]
    pub fn compare(&self, other: &Self) -> DiffFeatures {
        diff_features(&self.path, &other.path)
    }
}

/// Sample identifier of a specimen file: its file name without `suffix`.
///
/// Returns `None` if the file name does not end with `suffix` or is not
/// valid UTF-8.
#[must_use]
pub fn sample_name(path: &Path, suffix: &str) -> Option<String> {
    path.file_name()?
        .to_str()?
        .strip_suffix(suffix)
        .map(str::to_owned)
}

/// Class label of a specimen directory: the integer after its last space,
/// as in `"planaria group 3"`.
#[must_use]
pub fn class_label(dir_name: &str) -> Option<i64> {
    dir_name.rsplit(' ').next()?.parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    const STRAIGHT: &str = "TERMINALS\n2\n\n\n\nNODES\n0 0\t1\n3 4\t2\n6 8\t1\n\n\n\nEDGES\n0 0 3 4\t1 2\n3 4 6 8\t2 1\n\n\n\nPATH\n0 0\t1\n3 4\t2\n6 8\t1\n";

    #[test]
    fn straightens_main_path() {
        let specimen = Specimen::parse(STRAIGHT, &ParseOptions::default()).unwrap();
        assert_eq!(specimen.terminal_count(), 2);
        let samples = specimen.path().samples();
        assert_eq!(samples.len(), 3);
        assert!((samples[2].arc_length - 10.0).abs() < TOLERANCE);

        let features = specimen.features();
        assert!((features.length - 10.0).abs() < TOLERANCE);
        // 5 * (0 + 2) + 5 * (2 + 1)
        assert!((features.area - 25.0).abs() < TOLERANCE);
    }

    #[test]
    fn graph_matches_header() {
        let specimen = Specimen::parse(STRAIGHT, &ParseOptions::default()).unwrap();
        let graph = specimen.graph().unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.terminals(), vec![0, 2]);
    }

    #[test]
    fn header_only_file_is_degenerate() {
        let specimen = Specimen::parse("TERMINALS\n0", &ParseOptions::default()).unwrap();
        assert!(specimen.path().is_empty());
        let features = specimen.features();
        assert_eq!(features.terminal_count, 0);
        assert!(features.length.is_nan());
        assert_eq!(specimen.graph().unwrap().node_count(), 0);
    }

    #[test]
    fn compare_with_degenerate() {
        let full = Specimen::parse(STRAIGHT, &ParseOptions::default()).unwrap();
        let empty = Specimen::parse("TERMINALS\n0", &ParseOptions::default()).unwrap();
        let diff = full.compare(&empty);
        assert!((diff.absolute_diff - 25.0).abs() < TOLERANCE);
        assert!((diff.relative_diff - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Specimen::from_file(
            "/nonexistent/planaria/worm_skeleton_extra.txt",
            &ParseOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::PlanariaError::Io(_)));
    }

    #[test]
    fn feature_row_carries_labels() {
        let specimen = Specimen::parse(STRAIGHT, &ParseOptions::default()).unwrap();
        let row = specimen.feature_row("worm_01", 4);
        assert_eq!(row.sample, "worm_01");
        assert_eq!(row.class_label, 4);
        assert_eq!(row.features.sample_count, 3);
    }

    #[test]
    fn sample_name_strips_exact_suffix() {
        let path = Path::new("/data/group 1/worm_text_skeleton_extra.txt");
        assert_eq!(
            sample_name(path, SKELETON_PATH_SUFFIX).as_deref(),
            Some("worm_text")
        );
        assert_eq!(sample_name(Path::new("worm.png"), SKELETON_PATH_SUFFIX), None);
    }

    #[test]
    fn class_label_from_directory_name() {
        assert_eq!(class_label("planaria group 3"), Some(3));
        assert_eq!(class_label("12"), Some(12));
        assert_eq!(class_label("planaria group"), None);
    }
}
