use serde::{Deserialize, Serialize};

use super::profile;
use crate::geometry::SkeletonPath;

/// Scalar descriptors of one specimen's thickness profile.
///
/// Floating-point fields are NaN when the path is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeFeatureSet {
    pub terminal_count: usize,
    pub length: f64,
    pub area: f64,
    pub mean_radius: f64,
    pub max_radius: f64,
    pub median_radius: f64,
    pub sample_count: usize,
}

impl ShapeFeatureSet {
    /// Column names of [`ShapeFeatureSet::to_record`], in order.
    pub const KEYS: [&'static str; 7] = [
        "terminal_count",
        "length",
        "area",
        "mean_radius",
        "max_radius",
        "median_radius",
        "sample_count",
    ];

    /// Flattens the set into `key -> value` pairs for tabular export.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_record(&self) -> Vec<(&'static str, f64)> {
        let values = [
            self.terminal_count as f64,
            self.length,
            self.area,
            self.mean_radius,
            self.max_radius,
            self.median_radius,
            self.sample_count as f64,
        ];
        Self::KEYS.into_iter().zip(values).collect()
    }
}

/// Computes the [`ShapeFeatureSet`] of a path.
pub struct ExtractFeatures<'a> {
    path: &'a SkeletonPath,
    terminal_count: usize,
}

impl<'a> ExtractFeatures<'a> {
    /// Creates a new `ExtractFeatures` query. The terminal count comes from
    /// the diagram header, not from the path.
    #[must_use]
    pub fn new(path: &'a SkeletonPath, terminal_count: usize) -> Self {
        Self {
            path,
            terminal_count,
        }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> ShapeFeatureSet {
        ShapeFeatureSet {
            terminal_count: self.terminal_count,
            length: profile::length(self.path),
            area: profile::area(self.path),
            mean_radius: profile::mean_radius(self.path),
            max_radius: profile::max_radius(self.path),
            median_radius: profile::median_radius(self.path),
            sample_count: self.path.len(),
        }
    }
}

/// One row of a feature table: a specimen's features keyed by its sample
/// name and class label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub sample: String,
    pub class_label: i64,
    #[serde(flatten)]
    pub features: ShapeFeatureSet,
}
