pub mod label;
pub mod sample;

pub use label::ShapeLabel;
pub use sample::{flatten_pixels, ShapeSample};
