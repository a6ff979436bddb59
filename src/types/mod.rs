pub mod bounds;
pub mod point;

pub use bounds::BoundingBox;
pub use point::Coord;
