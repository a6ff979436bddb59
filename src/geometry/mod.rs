pub mod polygon;
pub mod ring;
pub mod validation;

pub use polygon::{Polygon, RawGeometry};
pub use ring::Ring;
pub use validation::validate;
