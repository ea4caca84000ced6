//! Scalar measurements of a thickness profile.
//!
//! Every function returns NaN for an empty path: a specimen without a
//! skeleton has no length, area or radius, and that is data, not an error.

use crate::geometry::SkeletonPath;

/// Arc length of the whole path.
#[must_use]
pub fn length(path: &SkeletonPath) -> f64 {
    path.samples().last().map_or(f64::NAN, |s| s.arc_length)
}

/// Twice the area under the radius profile (trapezoidal rule, not halved).
///
/// Since the radius is a half-width, this is the area of the straightened
/// outline with both sides of the skeleton counted. All areas in this crate
/// use the same convention.
#[must_use]
pub fn area(path: &SkeletonPath) -> f64 {
    if path.is_empty() {
        return f64::NAN;
    }
    path.samples()
        .windows(2)
        .map(|pair| (pair[1].arc_length - pair[0].arc_length) * (pair[0].radius + pair[1].radius))
        .sum()
}

/// Average radius along the path, `area / 2 / length`.
#[must_use]
pub fn mean_radius(path: &SkeletonPath) -> f64 {
    area(path) / 2.0 / length(path)
}

#[must_use]
pub fn max_radius(path: &SkeletonPath) -> f64 {
    path.radii().reduce(f64::max).unwrap_or(f64::NAN)
}

/// Median of all sample radii; the mean of the two middle values for an even
/// sample count.
#[must_use]
pub fn median_radius(path: &SkeletonPath) -> f64 {
    let mut radii: Vec<f64> = path.radii().collect();
    if radii.is_empty() {
        return f64::NAN;
    }
    radii.sort_by(f64::total_cmp);
    let mid = radii.len() / 2;
    if radii.len() % 2 == 0 {
        (radii[mid - 1] + radii[mid]) / 2.0
    } else {
        radii[mid]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PathSample;
    use approx::assert_relative_eq;

    fn path(samples: &[(f64, f64)]) -> SkeletonPath {
        SkeletonPath::from_samples(
            samples
                .iter()
                .map(|&(x, r)| PathSample::new(x, r))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_path_is_nan_everywhere() {
        let empty = SkeletonPath::empty();
        assert!(length(&empty).is_nan());
        assert!(area(&empty).is_nan());
        assert!(mean_radius(&empty).is_nan());
        assert!(max_radius(&empty).is_nan());
        assert!(median_radius(&empty).is_nan());
    }

    #[test]
    fn triangle_profile() {
        let p = path(&[(0.0, 0.0), (10.0, 2.0)]);
        assert_relative_eq!(length(&p), 10.0);
        // True area is 10; the doubled convention gives 20.
        assert_relative_eq!(area(&p), 20.0);
        assert_relative_eq!(mean_radius(&p), 1.0);
        assert_relative_eq!(max_radius(&p), 2.0);
        assert_relative_eq!(median_radius(&p), 1.0);
    }

    #[test]
    fn odd_sample_median() {
        let p = path(&[(0.0, 0.0), (1.0, 4.0), (2.0, 3.0)]);
        assert_relative_eq!(median_radius(&p), 3.0);
        assert_relative_eq!(max_radius(&p), 4.0);
        // 1 * (0 + 4) + 1 * (4 + 3)
        assert_relative_eq!(area(&p), 11.0);
    }

    #[test]
    fn zero_width_segments_add_no_area() {
        let p = path(&[(0.0, 0.0), (2.0, 1.0), (2.0, 3.0), (4.0, 3.0)]);
        // 2 * (0 + 1) + 0 + 2 * (3 + 3)
        assert_relative_eq!(area(&p), 14.0);
        assert_relative_eq!(length(&p), 4.0);
    }

    #[test]
    fn origin_only_path_has_no_mean_radius() {
        let p = path(&[(0.0, 0.0)]);
        assert_relative_eq!(length(&p), 0.0);
        assert_relative_eq!(area(&p), 0.0);
        assert!(mean_radius(&p).is_nan());
    }
}
