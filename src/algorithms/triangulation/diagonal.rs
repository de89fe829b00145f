//! Ear clipping over previous/next index arrays.
//!
//! Every vertex caches whether it is an ear, meaning the segment between its
//! two neighbours is a proper internal diagonal. Clipping an ear only changes
//! the neighbourhood of the two adjacent vertices, so only their flags are
//! recomputed.
//!
//! The input must be a counter-clockwise simple polygon without repeated
//! consecutive vertices or vanishing angles. Such input is rejected up front.
use log::warn;

use super::check_index_width;
use crate::data::polygon::{signed_area, validate as validate_coordinates};
use crate::data::{Point, TriangleBuffer};
use crate::predicates::{angle_degrees, segments_intersect, triangle_area};
use crate::{Error, PolygonScalar, VertexIndex};

/// Smallest accepted interior angle, in degrees. About one microradian.
pub const ANGLE_TOLERANCE: f64 = 5.7e-5;

/// Reject polygons the diagonal engine cannot triangulate.
pub fn validate<T: PolygonScalar>(points: &[Point<T, 2>]) -> Result<(), Error> {
  validate_coordinates(points, &[])?;
  let n = points.len();
  if n < 3 {
    warn!("rejecting polygon with {} vertices", n);
    return Err(Error::TooFewVertices);
  }

  let neighbours = |curt: usize| ((curt + n - 1) % n, (curt + 1) % n);

  for curt in 0..n {
    let (prev, _) = neighbours(curt);
    if points[prev] == points[curt] {
      warn!("vertex {} coincides with its predecessor", curt);
      return Err(Error::DegenerateVertex(curt));
    }
  }

  let tolerance = T::from_f64_constant(ANGLE_TOLERANCE);
  for curt in 0..n {
    let (prev, next) = neighbours(curt);
    let angle = angle_degrees(&points[prev], &points[curt], &points[next]);
    if angle.abs() <= tolerance {
      warn!("angle of {:?} degrees at vertex {}", angle, curt);
      return Err(Error::DegenerateAngle(curt));
    }
  }

  if signed_area(points) <= T::zero() {
    warn!("rejecting polygon with non-positive area");
    return Err(Error::NonPositiveArea);
  }
  Ok(())
}

/// Triangulate a counter-clockwise simple polygon.
///
/// All but the last triangle list the clipped diagonal first.
pub fn triangulate<T, I>(points: &[Point<T, 2>]) -> Result<TriangleBuffer<I>, Error>
where
  T: PolygonScalar,
  I: VertexIndex,
{
  validate(points)?;
  check_index_width::<I>(points.len())?;

  let n = points.len();
  let mut triangles = TriangleBuffer::for_polygon(n, 0);
  let mut list = List::new(n);
  let mut ear: Vec<bool> = (0..n)
    .map(|i| list.diagonal(points, list.prev(i), list.next(i)))
    .collect();

  let mut i2 = 0;
  let mut misses = 0;
  while triangles.len() < n - 3 {
    if ear[i2] {
      let i3 = list.next(i2);
      let i4 = list.next(i3);
      let i1 = list.prev(i2);
      let i0 = list.prev(i1);

      list.delete(i2);
      ear[i1] = list.diagonal(points, i0, i3);
      ear[i3] = list.diagonal(points, i1, i4);

      triangles.push(i3, i1, i2);
      misses = 0;
    } else {
      misses += 1;
      if misses > n - triangles.len() {
        warn!(
          "no ear among {} remaining vertices",
          n - triangles.len()
        );
        return Err(Error::UnresolvedDegenerate);
      }
    }
    i2 = list.next(i2);
  }

  triangles.push(list.next(i2), list.prev(i2), i2);
  Ok(triangles)
}

///////////////////////////////////////////////////////////////////////////////
// Linked list over vertex indices

struct List {
  prev: Vec<usize>,
  next: Vec<usize>,
}

impl List {
  fn new(size: usize) -> List {
    let mut prev = Vec::with_capacity(size);
    let mut next = Vec::with_capacity(size);
    prev.resize(size, 0);
    next.resize(size, 0);
    for i in 0..size {
      prev[(i + 1) % size] = i;
      next[i] = (i + 1) % size;
    }
    List { prev, next }
  }

  fn prev(&self, vertex: usize) -> usize {
    self.prev[vertex]
  }

  fn next(&self, vertex: usize) -> usize {
    self.next[vertex]
  }

  fn delete(&mut self, vertex: usize) {
    let prev = self.prev[vertex];
    let next = self.next[vertex];
    self.next[prev] = next;
    self.prev[next] = prev;
  }

  /// `im1 ip1` is a proper internal diagonal of the remaining polygon.
  fn diagonal<T: PolygonScalar>(&self, points: &[Point<T, 2>], im1: usize, ip1: usize) -> bool {
    self.in_cone(points, im1, ip1)
      && self.in_cone(points, ip1, im1)
      && self.diagonalie(points, im1, ip1)
  }

  /// The diagonal leaves `im1` strictly inside the cone of its two edges.
  fn in_cone<T: PolygonScalar>(&self, points: &[Point<T, 2>], im1: usize, ip1: usize) -> bool {
    let im2 = self.prev(im1);
    let i = self.next(im1);
    let area = |a: usize, b: usize, c: usize| triangle_area(&points[a], &points[b], &points[c]);

    if area(im1, i, im2) >= T::zero() {
      area(im1, ip1, im2) > T::zero() && area(ip1, im1, i) > T::zero()
    } else {
      !(area(im1, ip1, i) >= T::zero() && area(ip1, im1, im2) >= T::zero())
    }
  }

  /// No edge of the remaining polygon that avoids both endpoints touches the
  /// segment `im1 ip1`.
  fn diagonalie<T: PolygonScalar>(&self, points: &[Point<T, 2>], im1: usize, ip1: usize) -> bool {
    let mut j = im1;
    loop {
      let jp1 = self.next(j);
      if j != im1
        && j != ip1
        && jp1 != im1
        && jp1 != ip1
        && segments_intersect(&points[im1], &points[ip1], &points[j], &points[jp1])
      {
        return false;
      }
      j = jp1;
      if j == im1 {
        return true;
      }
    }
  }
}
