pub mod types;
pub mod plane;
pub mod iterations;

pub use types::{ConfigurationError, PlanePoint, RenderConfig, Variant};
pub use plane::{map_pixel, PlaneMapper};
pub use iterations::{classify, iterate_point};
