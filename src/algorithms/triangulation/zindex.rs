use super::ring::{NodeId, Ring};
use crate::algorithms::zhash::zhash_pair;
use crate::data::Point;
use crate::PolygonScalar;

/// Rings with more vertices than this are clipped with the z-order index.
pub const HASH_THRESHOLD: usize = 80;

/// Maps points to Morton keys on a grid spanning a bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ZIndex<T> {
  min_x: T,
  min_y: T,
  inv_size: T,
}

impl<T: PolygonScalar> ZIndex<T> {
  /// Grid over the bounding box of `points`. `None` when the box has no
  /// extent.
  pub fn new(points: &[Point<T, 2>]) -> Option<ZIndex<T>> {
    let first = points.first()?;
    let (mut min_x, mut min_y) = (first.array[0], first.array[1]);
    let (mut max_x, mut max_y) = (min_x, min_y);
    for pt in &points[1..] {
      let [x, y] = pt.array;
      min_x = min_x.min(x);
      min_y = min_y.min(y);
      max_x = max_x.max(x);
      max_y = max_y.max(y);
    }
    let size = (max_x - min_x).max(max_y - min_y);
    if size.is_zero() {
      return None;
    }
    Some(ZIndex {
      min_x,
      min_y,
      inv_size: T::one() / size,
    })
  }

  /// Points outside the box saturate to the nearest grid cell.
  pub fn z_order(&self, x: T, y: T) -> u64 {
    let qx = (T::ZORDER_SCALE * (x - self.min_x) * self.inv_size).quantise();
    let qy = (T::ZORDER_SCALE * (y - self.min_y) * self.inv_size).quantise();
    zhash_pair(qx, qy)
  }

  /// Key every node of the ring (once) and link the nodes in key order
  /// through `prev_z`/`next_z`.
  pub fn index_curve(&self, ring: &mut Ring<T>, start: NodeId) {
    let mut p = start;
    loop {
      let (x, y) = (ring.x(p), ring.y(p));
      let node = ring.node_mut(p);
      if node.z.is_none() {
        node.z = Some(self.z_order(x, y));
      }
      node.prev_z = Some(node.prev);
      node.next_z = Some(node.next);
      p = node.next;
      if p == start {
        break;
      }
    }

    if let Some(tail) = ring.node(p).prev_z {
      ring.node_mut(tail).next_z = None;
    }
    ring.node_mut(p).prev_z = None;

    sort_linked(ring, p);
  }
}

/// Bottom-up merge sort of the `next_z` list starting at `list`, by key.
/// Stable. Returns the new head.
pub(crate) fn sort_linked<T: PolygonScalar>(ring: &mut Ring<T>, list: NodeId) -> NodeId {
  let key = |ring: &Ring<T>, id: NodeId| ring.node(id).z.unwrap_or(0);
  let mut head = Some(list);
  let mut in_size = 1;

  loop {
    let mut p = head;
    head = None;
    let mut tail: Option<NodeId> = None;
    let mut merges = 0;

    while let Some(p_start) = p {
      merges += 1;
      let mut q = Some(p_start);
      let mut p_size = 0;
      for _ in 0..in_size {
        p_size += 1;
        q = q.and_then(|q| ring.node(q).next_z);
        if q.is_none() {
          break;
        }
      }
      let mut q_size = in_size;

      loop {
        let from_p = match (p, q) {
          (Some(p), Some(q)) if p_size > 0 && q_size > 0 => key(ring, p) <= key(ring, q),
          (Some(_), _) if p_size > 0 => true,
          (_, Some(_)) if q_size > 0 => false,
          _ => break,
        };
        let e = match (from_p, p, q) {
          (true, Some(e), _) => {
            p = ring.node(e).next_z;
            p_size -= 1;
            e
          }
          (false, _, Some(e)) => {
            q = ring.node(e).next_z;
            q_size -= 1;
            e
          }
          _ => break,
        };

        match tail {
          Some(t) => ring.node_mut(t).next_z = Some(e),
          None => head = Some(e),
        }
        ring.node_mut(e).prev_z = tail;
        tail = Some(e);
      }

      p = q;
    }

    if let Some(t) = tail {
      ring.node_mut(t).next_z = None;
    }
    in_size *= 2;

    if merges <= 1 {
      return head.unwrap_or(list);
    }
  }
}
