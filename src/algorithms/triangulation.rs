use crate::data::{Point, Polygon, TriangleBuffer};
use crate::{Error, PolygonScalar, VertexIndex};

pub mod diagonal;
pub mod earclip;
mod holes;
mod ring;
mod zindex;

/// Triangulation with the ear-clipping engine. Triangles reference vertices
/// by their position in the input sequence.
pub trait Triangulate {
  fn triangulate<I: VertexIndex>(self) -> Result<TriangleBuffer<I>, Error>;
}

impl<'a, T: PolygonScalar> Triangulate for &'a Polygon<T> {
  fn triangulate<I: VertexIndex>(self) -> Result<TriangleBuffer<I>, Error> {
    earclip::earcut(self.points(), self.holes())
  }
}

impl<'a, T: PolygonScalar> Triangulate for &'a [Point<T, 2>] {
  fn triangulate<I: VertexIndex>(self) -> Result<TriangleBuffer<I>, Error> {
    earclip::earcut(self, &[])
  }
}

/// Every index below `len` fits `I`.
pub(crate) fn check_index_width<I: VertexIndex>(len: usize) -> Result<(), Error> {
  match I::try_from_usize(len.saturating_sub(1)) {
    Some(_) => Ok(()),
    None => Err(Error::IndexOverflow),
  }
}
