use serde::{Deserialize, Serialize};

use super::resample::resample_common_grid;
use crate::geometry::SkeletonPath;
use crate::math::affine_1d::{positive_excess, Affine1};
use crate::operations::query::profile;

/// Dissimilarity of two specimens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffFeatures {
    /// Area inside exactly one of the two straightened outlines.
    pub absolute_diff: f64,
    /// `absolute_diff` relative to the area covered by either outline, in
    /// `[0, 1]`. An empty profile covers no area, so it scores 1 against any
    /// profile with positive area. NaN when neither outline covers any area.
    pub relative_diff: f64,
}

/// Symmetric difference of two profiles over one grid interval.
///
/// Both sides of the skeleton are counted, matching the doubled area
/// convention of [`profile::area`]. Zero-width intervals contribute nothing.
fn interval_difference(x: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (left, right) = x;
    let (Some(line_a), Some(line_b)) = (
        Affine1::through(left, a.0, right, a.1),
        Affine1::through(left, b.0, right, b.1),
    ) else {
        return 0.0;
    };
    let a_above = positive_excess(&line_a, &line_b, left, right);
    let b_above = positive_excess(&line_b, &line_a, left, right);
    tracing::trace!(left, right, a_above, b_above, "interval excess");
    (a_above + b_above) * 2.0
}

/// Exact area of the symmetric difference between two straightened
/// outlines.
///
/// Both profiles are resampled onto a common grid; on every interval each
/// profile is affine, so the integral of their absolute difference is
/// computed in closed form. An empty profile behaves like a zero radius
/// everywhere, so the result against it is the other profile's area.
#[must_use]
pub fn symmetric_difference_area(a: &SkeletonPath, b: &SkeletonPath) -> f64 {
    let grid = resample_common_grid(a, b);
    (1..grid.len())
        .map(|i| {
            interval_difference(
                (grid.abscissas[i - 1], grid.abscissas[i]),
                (grid.radii_a[i - 1], grid.radii_a[i]),
                (grid.radii_b[i - 1], grid.radii_b[i]),
            )
        })
        .sum()
}

/// Area an outline contributes to a comparison; an empty profile covers
/// nothing.
fn covered_area(path: &SkeletonPath) -> f64 {
    if path.is_empty() {
        0.0
    } else {
        profile::area(path)
    }
}

/// Absolute and normalized symmetric difference of two profiles.
///
/// The union area is `(area_a + area_b - absolute_diff) / 2`, so
/// `relative_diff = absolute_diff / (union + absolute_diff)`.
#[must_use]
pub fn diff_features(a: &SkeletonPath, b: &SkeletonPath) -> DiffFeatures {
    let absolute_diff = symmetric_difference_area(a, b);
    let union_area = (covered_area(a) + covered_area(b) - absolute_diff) / 2.0;
    let relative_diff = absolute_diff / (union_area + absolute_diff);
    tracing::debug!(absolute_diff, relative_diff, "compared skeleton paths");
    DiffFeatures {
        absolute_diff,
        relative_diff,
    }
}
