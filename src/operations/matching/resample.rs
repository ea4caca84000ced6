use crate::geometry::{PathSample, SkeletonPath};

/// Two profiles sampled on the same abscissas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommonGrid {
    pub abscissas: Vec<f64>,
    pub radii_a: Vec<f64>,
    pub radii_b: Vec<f64>,
}

impl CommonGrid {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            abscissas: Vec::with_capacity(capacity),
            radii_a: Vec::with_capacity(capacity),
            radii_b: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, x: f64, radius_a: f64, radius_b: f64) {
        self.abscissas.push(x);
        self.radii_a.push(radius_a);
        self.radii_b.push(radius_b);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abscissas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abscissas.is_empty()
    }
}

/// Radius of `samples` at `x`, interpolated between `samples[next - 1]` and
/// `samples[next]`. Before the first sample the profile is taken as zero.
fn interpolate(samples: &[PathSample], next: usize, x: f64) -> f64 {
    if next == 0 {
        return 0.0;
    }
    let left = samples[next - 1];
    let right = samples[next];
    let width = right.arc_length - left.arc_length;
    if width == 0.0 {
        return right.radius;
    }
    let t = (x - left.arc_length) / width;
    t * (right.radius - left.radius) + left.radius
}

/// Merges the abscissas of two profiles into one ordered grid.
///
/// The sweep always advances the profile with the smaller current abscissa
/// and interpolates the other one there; coincident abscissas are emitted
/// once with both original radii. After one profile runs out, the rest of
/// the other is emitted against a radius of zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn resample_common_grid(a: &SkeletonPath, b: &SkeletonPath) -> CommonGrid {
    let (sa, sb) = (a.samples(), b.samples());
    let mut grid = CommonGrid::with_capacity(sa.len() + sb.len());
    let (mut i, mut j) = (0, 0);

    while i < sa.len() && j < sb.len() {
        let (xa, xb) = (sa[i].arc_length, sb[j].arc_length);
        if xa == xb {
            grid.push(xa, sa[i].radius, sb[j].radius);
            i += 1;
            j += 1;
        } else if xa < xb {
            grid.push(xa, sa[i].radius, interpolate(sb, j, xa));
            i += 1;
        } else {
            grid.push(xb, interpolate(sa, i, xb), sb[j].radius);
            j += 1;
        }
    }
    for sample in &sa[i..] {
        grid.push(sample.arc_length, sample.radius, 0.0);
    }
    for sample in &sb[j..] {
        grid.push(sample.arc_length, 0.0, sample.radius);
    }

    tracing::trace!(
        len_a = sa.len(),
        len_b = sb.len(),
        grid = grid.len(),
        "resampled profiles onto common grid"
    );
    grid
}
