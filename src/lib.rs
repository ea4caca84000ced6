//! Thickness-profile analysis of skeletonized specimen outlines.
//!
//! A specimen's medial-axis skeleton, annotated with the inscribed radius at
//! every node, is read from the diagram text format ([`format`]), unrolled
//! into a radius-versus-arc-length profile ([`operations::creation::Straighten`]),
//! summarised by scalar features ([`operations::query`]) and compared with
//! other specimens by the exact area of the symmetric difference of the
//! profiles ([`operations::matching`]).

pub mod error;
pub mod format;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod specimen;
pub mod topology;

pub use error::{PlanariaError, Result};
pub use specimen::Specimen;
