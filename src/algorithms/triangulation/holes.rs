use log::trace;

use super::ring::{NodeId, Ring};
use crate::data::polygon::hole_ranges;
use crate::data::Point;
use crate::{PolygonScalar, TotalOrd};

/// Splice every hole of `points` into the ring at `outer`, left to right.
/// Returns a node on the merged ring.
pub(crate) fn eliminate_holes<T: PolygonScalar>(
  ring: &mut Ring<T>,
  points: &[Point<T, 2>],
  holes: &[usize],
  mut outer: NodeId,
) -> NodeId {
  let mut queue = Vec::with_capacity(holes.len());
  for range in hole_ranges(points.len(), holes) {
    if let Some(list) = ring.linked_list(points, range, false) {
      if list == ring.next(list) {
        ring.node_mut(list).steiner = true;
      }
      queue.push(ring.leftmost(list));
    }
  }

  // Stable: holes that tie on position and slope keep their input order.
  queue.sort_by(|&a, &b| queue_key(ring, a).total_cmp(&queue_key(ring, b)));

  for hole in queue {
    outer = eliminate_hole(ring, hole, outer);
  }
  outer
}

/// Position of the leftmost vertex, then the slope of its outgoing edge.
fn queue_key<T: PolygonScalar>(ring: &Ring<T>, id: NodeId) -> (T, T, T) {
  let next = ring.next(id);
  let slope = (ring.y(next) - ring.y(id)) / (ring.x(next) - ring.x(id));
  (ring.x(id), ring.y(id), slope)
}

fn eliminate_hole<T: PolygonScalar>(ring: &mut Ring<T>, hole: NodeId, outer: NodeId) -> NodeId {
  let bridge = match find_hole_bridge(ring, hole, outer) {
    Some(bridge) => bridge,
    None => {
      trace!("no bridge for hole at vertex {}", ring.node(hole).i);
      return outer;
    }
  };
  trace!(
    "bridge from hole vertex {} to vertex {}",
    ring.node(hole).i,
    ring.node(bridge).i
  );
  let bridge_reverse = ring.split_polygon(bridge, hole);
  let next = ring.next(bridge_reverse);
  ring.filter_points(bridge_reverse, Some(next));
  let next = ring.next(bridge);
  ring.filter_points(bridge, Some(next))
}

/// Outer vertex visible from the leftmost vertex `hole`, found by casting a
/// ray to the left (David Eberly's method).
fn find_hole_bridge<T: PolygonScalar>(
  ring: &Ring<T>,
  hole: NodeId,
  outer: NodeId,
) -> Option<NodeId> {
  let (hx, hy) = (ring.x(hole), ring.y(hole));
  let mut qx = T::neg_infinity();
  let mut m = None;

  if ring.equals(hole, outer) {
    return Some(outer);
  }
  // Nearest edge crossed by the ray; its left endpoint is the candidate.
  for p in ring.walk(outer) {
    let next = ring.next(p);
    if ring.equals(hole, next) {
      return Some(next);
    }
    let (px, py) = (ring.x(p), ring.y(p));
    let (nx, ny) = (ring.x(next), ring.y(next));
    if hy <= py && hy >= ny && ny != py {
      let x = px + (hy - py) * (nx - px) / (ny - py);
      if x <= hx && x > qx {
        qx = x;
        let candidate = if px < nx { p } else { next };
        if x == hx {
          return Some(candidate);
        }
        m = Some(candidate);
      }
    }
  }

  let mut m = m?;

  // Vertices inside the triangle (hole, crossing, candidate) may block the
  // view; pick the one with the smallest angle to the ray.
  let stop = m;
  let (mx, my) = (ring.x(m), ring.y(m));
  let a = Point::new([if hy < my { hx } else { qx }, hy]);
  let b = Point::new([mx, my]);
  let c = Point::new([if hy < my { qx } else { hx }, hy]);
  let mut tan_min = T::infinity();

  for p in ring.walk(stop) {
    let px = ring.x(p);
    if hx >= px && px >= mx && hx != px && ring.in_triangle(&a, &b, &c, p) {
      let tan = (hy - ring.y(p)).abs() / (hx - px);
      if ring.locally_inside(p, hole)
        && (tan < tan_min
          || (tan == tan_min
            && (px > ring.x(m) || (px == ring.x(m) && sector_contains_sector(ring, m, p)))))
      {
        m = p;
        tan_min = tan;
      }
    }
  }

  Some(m)
}

/// The sector of `m` contains the sector of `p`, for two copies of one point.
fn sector_contains_sector<T: PolygonScalar>(ring: &Ring<T>, m: NodeId, p: NodeId) -> bool {
  ring.orient(ring.prev(m), m, ring.prev(p)).is_ccw()
    && ring.orient(ring.next(p), m, ring.next(m)).is_ccw()
}
