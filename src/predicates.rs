//! Tolerance based predicates shared by the diagonal triangulator.
//!
//! All predicates work on plain floating point values. The ear-clipping engine
//! classifies turns with the exact [`Orientation`](crate::Orientation) instead.
use num_traits::*;

use crate::data::Point;
use crate::PolygonScalar;

/// Relative tolerance of [`collinear`].
pub const COLLINEAR_EPSILON: f64 = 2.220446049250313e-16;

/// Signed area of the triangle `abc`. Positive when counter-clockwise.
pub fn triangle_area<T: PolygonScalar>(a: &Point<T, 2>, b: &Point<T, 2>, c: &Point<T, 2>) -> T {
  let [ax, ay] = a.array;
  let [bx, by] = b.array;
  let [cx, cy] = c.array;
  ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay)) / T::from_constant(2)
}

/// True when the doubled area of `abc` is negligible compared to the square of
/// its longest side, or when every side is negligibly short.
pub fn collinear<T: PolygonScalar>(a: &Point<T, 2>, b: &Point<T, 2>, c: &Point<T, 2>) -> bool {
  let eps = T::from_f64_constant(COLLINEAR_EPSILON);
  let side_sq = |p: &Point<T, 2>, q: &Point<T, 2>| {
    let dx = p.array[0] - q.array[0];
    let dy = p.array[1] - q.array[1];
    dx * dx + dy * dy
  };
  let side_max_sq = side_sq(a, b).max(side_sq(b, c)).max(side_sq(c, a));
  side_max_sq <= eps
    || T::from_constant(2) * triangle_area(a, b, c).abs() <= eps * side_max_sq
}

/// True when `c` is collinear with `ab` and lies within the segment, measured
/// along the axis with the larger spread.
pub fn between<T: PolygonScalar>(a: &Point<T, 2>, b: &Point<T, 2>, c: &Point<T, 2>) -> bool {
  if !collinear(a, b, c) {
    return false;
  }
  let [ax, ay] = a.array;
  let [bx, by] = b.array;
  let [cx, cy] = c.array;
  if (ay - by).abs() < (ax - bx).abs() {
    ax.min(bx) <= cx && cx <= ax.max(bx)
  } else {
    ay.min(by) <= cy && cy <= ay.max(by)
  }
}

/// Proper crossing: the segments meet in a single point interior to both.
pub fn intersect_prop<T: PolygonScalar>(
  a: &Point<T, 2>,
  b: &Point<T, 2>,
  c: &Point<T, 2>,
  d: &Point<T, 2>,
) -> bool {
  if collinear(a, b, c) || collinear(a, b, d) || collinear(c, d, a) || collinear(c, d, b) {
    return false;
  }
  let positive = |p, q, r| triangle_area(p, q, r) > T::zero();
  (positive(a, b, c) ^ positive(a, b, d)) && (positive(c, d, a) ^ positive(c, d, b))
}

/// Segments `ab` and `cd` cross or touch.
pub fn segments_intersect<T: PolygonScalar>(
  a: &Point<T, 2>,
  b: &Point<T, 2>,
  c: &Point<T, 2>,
  d: &Point<T, 2>,
) -> bool {
  intersect_prop(a, b, c, d)
    || between(a, b, c)
    || between(a, b, d)
    || between(c, d, a)
    || between(c, d, b)
}

/// Angle swept at `p2` from the ray towards `p1` to the ray towards `p3`, in
/// degrees within `[0, 360)`. Zero when either ray is degenerate.
pub fn angle_degrees<T: PolygonScalar>(p1: &Point<T, 2>, p2: &Point<T, 2>, p3: &Point<T, 2>) -> T {
  let [x1, y1] = p1.array;
  let [x2, y2] = p2.array;
  let [x3, y3] = p3.array;
  let x = (x3 - x2) * (x1 - x2) + (y3 - y2) * (y1 - y2);
  let y = (x3 - x2) * (y1 - y2) - (y3 - y2) * (x1 - x2);
  if x.is_zero() && y.is_zero() {
    return T::zero();
  }
  let mut value = y.atan2(x);
  if value < T::zero() {
    value = value + T::from_f64_constant(2.0 * std::f64::consts::PI);
  }
  value.to_degrees()
}
