pub(crate) mod point;
pub mod polygon;
mod triangle;
mod triangles;

pub use triangle::*;
pub use triangles::TriangleBuffer;

#[doc(inline)]
pub use crate::data::polygon::{deviation, Polygon};
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
