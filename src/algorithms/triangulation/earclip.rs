//! Ear clipping with hole bridging and z-order hashing.
//!
//! The outer ring is linked counter-clockwise and every hole is spliced into
//! it through a bridge, leaving a single ring. Ears are clipped off that ring
//! until it is exhausted. When a full pass around the ring finds no ear the
//! engine escalates: first it filters colinear and duplicate vertices, then it
//! cures small self-intersections, and finally it splits the ring along a
//! valid diagonal and starts over on both halves.
//!
//! Rings with more than [`HASH_THRESHOLD`] vertices index their nodes along a
//! z-order curve so that the point-in-ear test only visits nearby vertices.
use log::{debug, trace, warn};

use super::check_index_width;
use super::holes::eliminate_holes;
use super::ring::{NodeId, Ring};
use super::zindex::ZIndex;
pub use super::zindex::HASH_THRESHOLD;
use crate::data::polygon::validate;
use crate::data::{Point, TriangleBuffer};
use crate::{Error, PolygonScalar, VertexIndex};

/// Recovery stage a ring has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
  Initial,
  Filtered,
  Cured,
}

/// Triangulate `points`, where `holes` lists the start of every hole ring in
/// increasing order. Either winding is accepted for every ring.
///
/// Returns an empty buffer when the outer ring collapses to fewer than three
/// vertices.
pub fn earcut<T, I>(points: &[Point<T, 2>], holes: &[usize]) -> Result<TriangleBuffer<I>, Error>
where
  T: PolygonScalar,
  I: VertexIndex,
{
  validate(points, holes)?;
  check_index_width::<I>(points.len())?;

  let mut triangles = TriangleBuffer::for_polygon(points.len(), holes.len());
  let outer_len = holes.first().copied().unwrap_or(points.len());
  let mut ring = Ring::with_capacity(points.len() + 2 * holes.len());

  let mut start = match ring.linked_list(points, 0..outer_len, true) {
    Some(start) if ring.next(start) != ring.prev(start) => start,
    _ => return Ok(triangles),
  };
  if !holes.is_empty() {
    start = eliminate_holes(&mut ring, points, holes, start);
  }

  let index = if points.len() > HASH_THRESHOLD {
    ZIndex::new(&points[..outer_len])
  } else {
    None
  };
  if index.is_some() {
    debug!("z-order index enabled for {} vertices", points.len());
  }

  earcut_linked(&mut ring, start, index.as_ref(), &mut triangles)?;
  Ok(triangles)
}

/// Clip every ring reachable from `start`. Recovery passes and split halves
/// are queued on a stack and run depth first.
fn earcut_linked<T, I>(
  ring: &mut Ring<T>,
  start: NodeId,
  index: Option<&ZIndex<T>>,
  triangles: &mut TriangleBuffer<I>,
) -> Result<(), Error>
where
  T: PolygonScalar,
  I: VertexIndex,
{
  let mut jobs = vec![(start, Pass::Initial)];

  while let Some((mut ear, pass)) = jobs.pop() {
    if pass == Pass::Initial {
      if let Some(index) = index {
        index.index_curve(ring, ear);
      }
    }

    let mut stop = ear;
    while ring.prev(ear) != ring.next(ear) {
      let prev = ring.prev(ear);
      let next = ring.next(ear);

      let clipped = match index {
        Some(index) => is_ear_hashed(ring, index, ear),
        None => is_ear(ring, ear),
      };
      if clipped {
        triangles.push(ring.node(prev).i, ring.node(ear).i, ring.node(next).i);
        ring.remove_node(ear);
        // Skipping the next vertex gives fewer sliver triangles.
        ear = ring.next(next);
        stop = ear;
        continue;
      }

      ear = next;
      if ear == stop {
        match pass {
          Pass::Initial => {
            debug!("no ear found, filtering ring at vertex {}", ring.node(ear).i);
            let filtered = ring.filter_points(ear, None);
            jobs.push((filtered, Pass::Filtered));
          }
          Pass::Filtered => {
            debug!("no ear found, curing local intersections");
            let filtered = ring.filter_points(ear, None);
            let cured = cure_local_intersections(ring, filtered, triangles);
            jobs.push((cured, Pass::Cured));
          }
          Pass::Cured => match split_earcut(ring, ear) {
            Some((a, c)) => {
              jobs.push((c, Pass::Initial));
              jobs.push((a, Pass::Initial));
            }
            None => {
              warn!(
                "no valid diagonal left; {} triangles emitted before giving up",
                triangles.len()
              );
              return Err(Error::UnresolvedDegenerate);
            }
          },
        }
        break;
      }
    }
  }
  Ok(())
}

/// `ear` is convex and no reflex vertex of the ring lies in the triangle it
/// forms with its neighbours.
fn is_ear<T: PolygonScalar>(ring: &Ring<T>, ear: NodeId) -> bool {
  let (a, c) = (ring.prev(ear), ring.next(ear));
  if !ring.orient(a, ear, c).is_ccw() {
    return false;
  }
  let (pa, pb, pc) = (ring.point(a), ring.point(ear), ring.point(c));
  let mut p = ring.next(c);
  while p != a {
    if ring.in_triangle(pa, pb, pc, p) && !ring.orient(ring.prev(p), p, ring.next(p)).is_ccw() {
      return false;
    }
    p = ring.next(p);
  }
  true
}

/// [`is_ear`] restricted to nodes whose z-order key falls within the key range
/// of the ear's bounding box.
fn is_ear_hashed<T: PolygonScalar>(ring: &Ring<T>, index: &ZIndex<T>, ear: NodeId) -> bool {
  let (a, c) = (ring.prev(ear), ring.next(ear));
  if !ring.orient(a, ear, c).is_ccw() {
    return false;
  }
  let (pa, pb, pc) = (ring.point(a), ring.point(ear), ring.point(c));
  let [ax, ay] = pa.array;
  let [bx, by] = pb.array;
  let [cx, cy] = pc.array;
  let min_z = index.z_order(ax.min(bx).min(cx), ay.min(by).min(cy));
  let max_z = index.z_order(ax.max(bx).max(cx), ay.max(by).max(cy));

  let key = |p: NodeId| ring.node(p).z.unwrap_or(0);
  let blocks = |p: NodeId| {
    p != a
      && p != c
      && ring.in_triangle(pa, pb, pc, p)
      && !ring.orient(ring.prev(p), p, ring.next(p)).is_ccw()
  };

  let mut p = ring.node(ear).prev_z;
  let mut n = ring.node(ear).next_z;

  // Walk both directions at once while both are in range.
  while let (Some(pp), Some(nn)) = (p, n) {
    if key(pp) < min_z || key(nn) > max_z {
      break;
    }
    if blocks(pp) || blocks(nn) {
      return false;
    }
    p = ring.node(pp).prev_z;
    n = ring.node(nn).next_z;
  }

  while let Some(pp) = p {
    if key(pp) < min_z {
      break;
    }
    if blocks(pp) {
      return false;
    }
    p = ring.node(pp).prev_z;
  }

  while let Some(nn) = n {
    if key(nn) > max_z {
      break;
    }
    if blocks(nn) {
      return false;
    }
    n = ring.node(nn).next_z;
  }

  true
}

/// Clip `p` and its successor wherever the edges `a p` and `p.next b` cross,
/// replacing the bow tie with the single triangle `a p b`.
fn cure_local_intersections<T, I>(
  ring: &mut Ring<T>,
  mut start: NodeId,
  triangles: &mut TriangleBuffer<I>,
) -> NodeId
where
  T: PolygonScalar,
  I: VertexIndex,
{
  let mut p = start;
  loop {
    let a = ring.prev(p);
    let next = ring.next(p);
    let b = ring.next(next);

    if !ring.equals(a, b)
      && ring.intersects(a, p, next, b)
      && ring.locally_inside(a, b)
      && ring.locally_inside(b, a)
    {
      triangles.push(ring.node(a).i, ring.node(p).i, ring.node(b).i);
      ring.remove_node(p);
      ring.remove_node(next);
      p = b;
      start = b;
    }
    p = ring.next(p);
    if p == start {
      break;
    }
  }
  ring.filter_points(p, None)
}

/// Split the ring along the first valid diagonal. Returns a node on each
/// half.
fn split_earcut<T: PolygonScalar>(ring: &mut Ring<T>, start: NodeId) -> Option<(NodeId, NodeId)> {
  let mut a = start;
  loop {
    let mut b = ring.next(ring.next(a));
    while b != ring.prev(a) {
      if ring.node(a).i != ring.node(b).i && ring.is_valid_diagonal(a, b) {
        trace!(
          "splitting along diagonal {} - {}",
          ring.node(a).i,
          ring.node(b).i
        );
        let c = ring.split_polygon(a, b);
        let next = ring.next(a);
        let a = ring.filter_points(a, Some(next));
        let next = ring.next(c);
        let c = ring.filter_points(c, Some(next));
        return Some((a, c));
      }
      b = ring.next(b);
    }
    a = ring.next(a);
    if a == start {
      return None;
    }
  }
}
