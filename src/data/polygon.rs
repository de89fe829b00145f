use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Range;

use super::{Point, TriangleView};
use crate::{Error, PolygonScalar, TotalOrd, VertexIndex};

/// Vertex sequence partitioned into an outer ring and zero or more holes.
///
/// `holes` holds the index of the first vertex of every hole in strictly
/// increasing order. Vertices before the first hole form the outer ring.
/// Rings are implicitly closed and may be given in either winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T, 2>>,
  pub(crate) holes: Vec<usize>,
}

impl<T> Polygon<T>
where
  T: PolygonScalar,
{
  pub fn new(points: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error> {
    Polygon::new_with_holes(points, Vec::new())
  }

  pub fn new_with_holes(points: Vec<Point<T, 2>>, holes: Vec<usize>) -> Result<Polygon<T>, Error> {
    let polygon = Polygon::new_unchecked(points, holes);
    polygon.validate()?;
    Ok(polygon)
  }

  pub fn new_unchecked(points: Vec<Point<T, 2>>, holes: Vec<usize>) -> Polygon<T> {
    Polygon { points, holes }
  }

  /// $O(n \log n)$ Sample a star-shaped polygon with `n` vertices.
  ///
  /// Vertices are drawn from the unit square and sorted by angle around the
  /// centre of their bounding box, so the ring is counter-clockwise.
  pub fn random_star<R>(n: usize, rng: &mut R) -> Polygon<T>
  where
    R: Rng + ?Sized,
    Standard: Distribution<T>,
  {
    let n = n.max(3);
    let mut points: Vec<Point<T, 2>> = (0..n).map(|_| rng.gen::<Point<T, 2>>()).collect();
    let (mut min, mut max) = (points[0].array, points[0].array);
    for pt in &points {
      for axis in 0..2 {
        min[axis] = min[axis].min(pt.array[axis]);
        max[axis] = max[axis].max(pt.array[axis]);
      }
    }
    let two = T::from_constant(2);
    let (cx, cy) = ((min[0] + max[0]) / two, (min[1] + max[1]) / two);
    let angle = |pt: &Point<T, 2>| (pt.array[1] - cy).atan2(pt.array[0] - cx);
    points.sort_by(|a, b| TotalOrd::total_cmp(&angle(a), &angle(b)));
    Polygon::new_unchecked(points, Vec::new())
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    validate(&self.points, &self.holes)
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn point(&self, idx: usize) -> &Point<T, 2> {
    &self.points[idx]
  }

  pub fn holes(&self) -> &[usize] {
    &self.holes
  }

  pub fn outer(&self) -> Range<usize> {
    0..self.holes.first().copied().unwrap_or(self.points.len())
  }

  pub fn hole_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
    hole_ranges(self.points.len(), &self.holes)
  }

  /// Signed area of the outer ring. Positive when counter-clockwise.
  pub fn signed_area(&self) -> T {
    signed_area(&self.points[self.outer()])
  }

  /// Outer area minus hole areas, regardless of winding.
  pub fn area(&self) -> T {
    area(&self.points, &self.holes)
  }

  pub fn deviation<I: VertexIndex>(&self, triangles: &[[I; 3]]) -> T {
    deviation(&self.points, &self.holes, triangles)
  }
}

/// Ranges of the hole rings in a sequence of `len` vertices.
pub fn hole_ranges(len: usize, holes: &[usize]) -> impl Iterator<Item = Range<usize>> + '_ {
  holes
    .iter()
    .enumerate()
    .map(move |(k, &start)| start..holes.get(k + 1).copied().unwrap_or(len))
}

/// Absolute outer area minus absolute hole areas.
pub fn area<T: PolygonScalar>(points: &[Point<T, 2>], holes: &[usize]) -> T {
  let outer = holes.first().copied().unwrap_or(points.len());
  let holes: T = hole_ranges(points.len(), holes)
    .map(|range| signed_area(&points[range]).abs())
    .sum();
  signed_area(&points[..outer]).abs() - holes
}

/// Shoelace area of a closed ring, positive when counter-clockwise.
pub fn signed_area<T: PolygonScalar>(ring: &[Point<T, 2>]) -> T {
  let twice: T = ring
    .iter()
    .zip(ring.iter().cycle().skip(ring.len().saturating_sub(1)))
    .map(|(curr, prev)| {
      let [px, py] = prev.array;
      let [cx, cy] = curr.array;
      px * cy - cx * py
    })
    .sum();
  twice / T::from_constant(2)
}

/// Relative difference between the polygon area and the summed unsigned area
/// of `triangles`. Zero for an exact triangulation.
///
/// Returns infinity when a triangle references a vertex that does not exist,
/// or when triangles cover area the polygon does not have.
pub fn deviation<T, I>(points: &[Point<T, 2>], holes: &[usize], triangles: &[[I; 3]]) -> T
where
  T: PolygonScalar,
  I: VertexIndex,
{
  let mut covered = T::zero();
  for triangle in triangles {
    let [a, b, c] = triangle.map(VertexIndex::usize);
    match (points.get(a), points.get(b), points.get(c)) {
      (Some(a), Some(b), Some(c)) => {
        covered = covered + TriangleView::new_unchecked([a, b, c]).signed_area().abs()
      }
      _ => return T::infinity(),
    }
  }
  let area = area(points, holes);
  if area.is_zero() {
    if covered.is_zero() {
      T::zero()
    } else {
      T::infinity()
    }
  } else {
    (T::one() - covered / area).abs()
  }
}

pub(crate) fn validate<T: PolygonScalar>(
  points: &[Point<T, 2>],
  holes: &[usize],
) -> Result<(), Error> {
  if let Some(bad) = points.iter().position(|pt| !pt.is_finite()) {
    return Err(Error::NonFiniteCoordinate(bad));
  }
  let mut prev = 0;
  for (k, &start) in holes.iter().enumerate() {
    if start == 0 || start >= points.len() {
      return Err(Error::IndexOutOfRange(k));
    }
    if k > 0 && start <= prev {
      return Err(Error::UnsortedHoles(k));
    }
    prev = start;
  }
  Ok(())
}
