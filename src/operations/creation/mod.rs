mod straighten;

pub use straighten::Straighten;
