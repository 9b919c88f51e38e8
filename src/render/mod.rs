pub mod buffer;
pub mod escape_time;
pub mod grouped;
pub mod scalar;

pub use buffer::ImageBuffer;
pub use escape_time::{render, render_into, render_timed};
pub use grouped::render_grouped;
pub use scalar::render_scalar;
