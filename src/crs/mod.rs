pub mod definition;
pub mod registry;
pub mod transform;

pub use definition::{CrsDefinition, CrsKind, CrsUnit};
pub use registry::{CrsRegistry, EPSG_3857, EPSG_4326, reproject};
pub use transform::CoordTransform;
