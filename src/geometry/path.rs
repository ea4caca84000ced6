use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// One sample of a straightened skeleton: radius at a given arc length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    pub arc_length: f64,
    pub radius: f64,
}

impl PathSample {
    #[must_use]
    pub const fn new(arc_length: f64, radius: f64) -> Self {
        Self { arc_length, radius }
    }
}

/// A thickness profile: radius as a function of arc length along the
/// skeleton's main path.
///
/// A non-empty path starts at `(0, 0)` and its arc lengths never decrease.
/// An empty path stands for a specimen without a detected skeleton; every
/// scalar derived from it is NaN.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkeletonPath {
    samples: Vec<PathSample>,
}

impl SkeletonPath {
    /// The path of a specimen with no skeleton.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Builds a path from explicit samples.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidProfile` if a value is not finite, the
    /// first sample is not `(0, 0)`, an arc length decreases, or a radius is
    /// negative.
    pub fn from_samples(samples: Vec<PathSample>) -> Result<Self, GeometryError> {
        if let Some(first) = samples.first() {
            if first.arc_length != 0.0 || first.radius != 0.0 {
                return Err(GeometryError::InvalidProfile(format!(
                    "first sample must be (0, 0), found ({}, {})",
                    first.arc_length, first.radius
                )));
            }
        }
        for (i, sample) in samples.iter().enumerate() {
            if !sample.arc_length.is_finite() || !sample.radius.is_finite() {
                return Err(GeometryError::InvalidProfile(format!(
                    "sample {i} is not finite"
                )));
            }
            if sample.radius < 0.0 {
                return Err(GeometryError::InvalidProfile(format!(
                    "sample {i} has negative radius {}",
                    sample.radius
                )));
            }
        }
        if let Some(i) = samples
            .windows(2)
            .position(|pair| pair[1].arc_length < pair[0].arc_length)
        {
            return Err(GeometryError::InvalidProfile(format!(
                "arc length decreases at sample {}",
                i + 1
            )));
        }
        Ok(Self { samples })
    }

    /// Builds a path from samples already known to satisfy the invariants.
    pub(crate) fn from_samples_unchecked(samples: Vec<PathSample>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[PathSample] {
        &self.samples
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Iterates over the radii in path order.
    pub fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.radius)
    }
}
