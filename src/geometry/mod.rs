pub mod path;

pub use path::{PathSample, SkeletonPath};
