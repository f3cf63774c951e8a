pub mod circle;
pub mod dataset;
pub mod figure;
pub mod square;
pub mod triangle;

pub use circle::CircleGenerator;
pub use dataset::{DatasetConfig, DatasetGenerator, Split};
pub use figure::FigureGenerator;
pub use square::SquareGenerator;
pub use triangle::TriangleGenerator;
