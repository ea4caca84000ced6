use crate::geometry::{PathSample, SkeletonPath};
use crate::math::{distance, Point};

/// Unrolls an ordered skeleton walk into a thickness profile.
///
/// The 2D course of the walk is discarded: every node is placed at the
/// cumulative Euclidean length travelled so far, keeping only its radius.
pub struct Straighten {
    nodes: Vec<(Point, f64)>,
}

impl Straighten {
    /// Creates a new `Straighten` operation over `(point, radius)` pairs in
    /// walk order.
    #[must_use]
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = (Point, f64)>,
    {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    /// Executes the operation.
    ///
    /// The profile opens with a synthetic `(0, 0)` sample standing in for the
    /// first node, so the profile closes to zero thickness at its start. Each
    /// following node contributes `(arc length so far, radius)`. An empty walk
    /// yields an empty path.
    #[must_use]
    pub fn execute(&self) -> SkeletonPath {
        if self.nodes.is_empty() {
            return SkeletonPath::empty();
        }

        let mut samples = Vec::with_capacity(self.nodes.len());
        samples.push(PathSample::new(0.0, 0.0));
        let mut arc_length = 0.0;
        for pair in self.nodes.windows(2) {
            let (previous, _) = pair[0];
            let (current, radius) = pair[1];
            arc_length += distance(&previous, &current);
            samples.push(PathSample::new(arc_length, radius));
        }

        tracing::trace!(samples = samples.len(), arc_length, "straightened skeleton path");
        SkeletonPath::from_samples_unchecked(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn empty_walk_is_empty_path() {
        let path = Straighten::new(Vec::<(Point, f64)>::new()).execute();
        assert!(path.is_empty());
    }

    #[test]
    fn single_node_is_origin_only() {
        let path = Straighten::new([(p(4.0, 4.0), 3.0)]).execute();
        assert_eq!(path.samples(), &[PathSample::new(0.0, 0.0)]);
    }

    #[test]
    fn accumulates_euclidean_lengths() {
        let path = Straighten::new([
            (p(0.0, 0.0), 5.0),
            (p(3.0, 4.0), 1.0),
            (p(3.0, 10.0), 2.0),
        ])
        .execute();
        let samples = path.samples();
        assert_eq!(samples.len(), 3);
        assert!((samples[0].arc_length).abs() < TOLERANCE);
        assert!((samples[0].radius).abs() < TOLERANCE);
        assert!((samples[1].arc_length - 5.0).abs() < TOLERANCE);
        assert!((samples[1].radius - 1.0).abs() < TOLERANCE);
        assert!((samples[2].arc_length - 11.0).abs() < TOLERANCE);
        assert!((samples[2].radius - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn arc_length_is_monotone_with_repeated_points() {
        let path = Straighten::new([
            (p(1.0, 1.0), 1.0),
            (p(1.0, 1.0), 2.0),
            (p(-2.0, 5.0), 2.0),
            (p(-2.0, 5.0), 0.5),
        ])
        .execute();
        let samples = path.samples();
        assert!(samples[0].arc_length == 0.0);
        assert!(samples
            .windows(2)
            .all(|w| w[1].arc_length >= w[0].arc_length));
        assert!((samples[3].arc_length - 5.0).abs() < TOLERANCE);
    }
}
