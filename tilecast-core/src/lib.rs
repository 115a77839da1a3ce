/// Tilecast Core Library - Fixed-camera tile grid projection
///
/// This library provides the stateless core functionality for mapping
/// level tile grids to screen pixels, including level-data parsing, the
/// stage camera model, and aspect-ratio compensation.

pub mod level;
pub mod catalog;
pub mod aspect;
pub mod camera;
pub mod projector;

// Re-export commonly used types
pub use level::{Level, LevelKey, Tile};
pub use catalog::{CatalogError, LevelCatalog, LevelQuery};
pub use aspect::{aspect_shift, AspectShift};
pub use camera::{CameraModel, Side};
pub use projector::{ProjectedGrid, TileProjector};
