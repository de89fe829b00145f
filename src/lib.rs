// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Polygon triangulation.
//!
//! Two engines share one set of geometric predicates:
//!
//! * [`earclip`](algorithms::triangulation::earclip): z-order hashed ear
//!   clipping with hole bridging and three escalating recovery passes. Accepts
//!   either winding.
//! * [`diagonal`](algorithms::triangulation::diagonal): the classical
//!   previous/next array ear clipper. Requires counter-clockwise input and
//!   rejects degenerate vertices and angles up front.
//!
//! Positive signed area means counter-clockwise in a y-up frame, everywhere in
//! this crate.
//!
//! ```rust
//! # use polytri_earcut::*;
//! # use polytri_earcut::data::Point;
//! let square = [
//!   Point::new([0.0, 0.0]),
//!   Point::new([1.0, 0.0]),
//!   Point::new([1.0, 1.0]),
//!   Point::new([0.0, 1.0]),
//! ];
//! let triangles = triangulate_simple(&square)?;
//! assert_eq!(triangles.len(), 2);
//! # Ok::<(), Error>(())
//! ```
use num_traits::*;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::Debug;
use std::iter::Sum;

pub mod algorithms;
pub mod data;
mod orientation;
pub mod predicates;

pub use orientation::Orientation;

use algorithms::triangulation::{diagonal, earclip};
use data::{Point, Polygon};

#[cfg(test)]
pub mod testing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three vertices.
  TooFewVertices,
  /// Vertex coincides with its predecessor.
  DegenerateVertex(usize),
  /// Interior angle at the vertex is within the angle tolerance of zero.
  DegenerateAngle(usize),
  /// Polygon area is zero or the vertices are ordered clockwise.
  NonPositiveArea,
  /// Hole start, given by its position in the hole list, is zero or past the
  /// last vertex.
  IndexOutOfRange(usize),
  /// Hole start, given by its position in the hole list, does not exceed its
  /// predecessor.
  UnsortedHoles(usize),
  /// Vertex count does not fit the requested index type.
  IndexOverflow,
  NonFiniteCoordinate(usize),
  /// Every recovery pass was tried and part of the polygon remains.
  UnresolvedDegenerate,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::TooFewVertices => write!(f, "Fewer than three vertices"),
      Error::DegenerateVertex(i) => write!(f, "Vertex {} coincides with its predecessor", i),
      Error::DegenerateAngle(i) => write!(f, "Degenerate angle at vertex {}", i),
      Error::NonPositiveArea => write!(f, "Polygon has zero or negative area"),
      Error::IndexOutOfRange(k) => write!(f, "Hole {} starts outside the vertex sequence", k),
      Error::UnsortedHoles(k) => write!(
        f,
        "Hole {} does not start after hole {}",
        k,
        usize::wrapping_sub(*k, 1)
      ),
      Error::IndexOverflow => write!(f, "Vertex count exceeds the index type"),
      Error::NonFiniteCoordinate(i) => write!(f, "Vertex {} has a non-finite coordinate", i),
      Error::UnresolvedDegenerate => write!(
        f,
        "Polygon is too degenerate to triangulate; no recovery pass succeeded"
      ),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

impl<A: TotalOrd, B: TotalOrd, C: TotalOrd> TotalOrd for (A, B, C) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
      .then_with(|| self.2.total_cmp(&other.2))
  }
}

/// Coordinate type accepted by the triangulation engines.
pub trait PolygonScalar: Float + TotalOrd + Debug + Sum + Default + 'static {
  /// Largest quantised coordinate used for z-order keys.
  const ZORDER_SCALE: Self;

  fn from_constant(val: i8) -> Self;
  fn from_f64_constant(val: f64) -> Self;
  /// Saturating conversion to the z-order grid. NaN maps to zero.
  fn quantise(self) -> u32;
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! floating_precision {
  ( $( $ty:ty => $scale:expr ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PolygonScalar for $ty {
        const ZORDER_SCALE: Self = $scale;

        fn from_constant(val: i8) -> Self {
          <$ty as From<i8>>::from(val)
        }

        fn from_f64_constant(val: f64) -> Self {
          val as $ty
        }

        fn quantise(self) -> u32 {
          self as u32
        }

        // Adaptive exact arithmetic from `geometry_predicates`. Inputs are
        // widened to f64 without rounding.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let wide = |v: $ty| -> f64 { v.into() };
          let orient = geometry_predicates::predicates::orient2d(
            [wide(p[0]), wide(p[1])],
            [wide(q[0]), wide(q[1])],
            [wide(r[0]), wide(r[1])],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

floating_precision!(f32 => 32767.0, f64 => 2147483647.0);

/// Integer type used for emitted vertex indices.
pub trait VertexIndex: Copy + Debug + Eq + Ord + std::hash::Hash + 'static {
  fn try_from_usize(i: usize) -> Option<Self>;
  /// Conversion for indices already checked against the vertex count.
  fn truncate(i: usize) -> Self;
  fn usize(self) -> usize;
}

macro_rules! vertex_index {
  ( $( $ty:ty => |$v:ident| $widen:expr ),* ) => {
    $(
      impl VertexIndex for $ty {
        fn try_from_usize(i: usize) -> Option<Self> {
          <$ty>::try_from(i).ok()
        }
        fn truncate(i: usize) -> Self {
          i as $ty
        }
        fn usize(self) -> usize {
          let $v = self;
          $widen
        }
      }
    )*
  };
}

vertex_index!(u16 => |v| <usize as From<u16>>::from(v), u32 => |v| v as usize, usize => |v| v);

/// Coordinate type of the top-level API, fixed per build.
#[cfg(feature = "single-precision")]
pub type Coord = f32;
/// Coordinate type of the top-level API, fixed per build.
#[cfg(not(feature = "single-precision"))]
pub type Coord = f64;

/// Index type of the top-level API, fixed per build.
#[cfg(feature = "index-u16")]
pub type Index = u16;
/// Index type of the top-level API, fixed per build.
#[cfg(not(feature = "index-u16"))]
pub type Index = u32;

/// Triangulate a simple polygon with the ear-clipping engine. Either winding
/// is accepted.
pub fn triangulate_simple(vertices: &[Point<Coord, 2>]) -> Result<Vec<[Index; 3]>, Error> {
  earclip::earcut(vertices, &[]).map(|buffer| buffer.into_vec())
}

/// Triangulate a polygon with holes. `hole_starts` lists, in increasing order,
/// the index of the first vertex of every hole; vertices before the first hole
/// form the outer ring.
pub fn triangulate_with_holes(
  vertices: &[Point<Coord, 2>],
  hole_starts: &[usize],
) -> Result<Vec<[Index; 3]>, Error> {
  earclip::earcut(vertices, hole_starts).map(|buffer| buffer.into_vec())
}

/// Triangulate a counter-clockwise simple polygon with the diagonal engine.
pub fn triangulate_diagonal(vertices: &[Point<Coord, 2>]) -> Result<Vec<[Index; 3]>, Error> {
  diagonal::triangulate(vertices).map(|buffer| buffer.into_vec())
}

/// Area of the outer ring minus the areas of the holes. Both are taken as
/// absolute values so winding does not matter.
pub fn polygon_area(vertices: &[Point<Coord, 2>], hole_starts: &[usize]) -> Result<Coord, Error> {
  Ok(Polygon::new_with_holes(vertices.to_vec(), hole_starts.to_vec())?.area())
}
