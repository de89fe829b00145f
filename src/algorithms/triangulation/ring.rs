use std::ops::Range;

use crate::data::polygon::signed_area;
use crate::data::{Point, PointLocation, TriangleView};
use crate::{Orientation, PolygonScalar, TotalOrd};

/// Handle of a node in the [`Ring`] arena. Handles stay valid after the node
/// is unlinked.
pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
  /// Index of the vertex in the input sequence.
  pub i: usize,
  pub point: Point<T, 2>,
  /// Cached z-order key; computed once.
  pub z: Option<u64>,
  /// Synthetic vertex that filtering must leave alone.
  pub steiner: bool,
  pub prev: NodeId,
  pub next: NodeId,
  pub prev_z: Option<NodeId>,
  pub next_z: Option<NodeId>,
}

/// Arena of circular doubly-linked vertex lists.
///
/// Nodes are never deallocated. Removing a node only unlinks it, so every
/// handle handed out remains safe to read.
pub(crate) struct Ring<T> {
  nodes: Vec<Node<T>>,
}

impl<T: PolygonScalar> Ring<T> {
  pub fn with_capacity(capacity: usize) -> Ring<T> {
    Ring {
      nodes: Vec::with_capacity(capacity),
    }
  }

  pub fn node(&self, id: NodeId) -> &Node<T> {
    &self.nodes[id]
  }

  pub fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
    &mut self.nodes[id]
  }

  pub fn point(&self, id: NodeId) -> &Point<T, 2> {
    &self.nodes[id].point
  }

  pub fn x(&self, id: NodeId) -> T {
    self.nodes[id].point.array[0]
  }

  pub fn y(&self, id: NodeId) -> T {
    self.nodes[id].point.array[1]
  }

  pub fn next(&self, id: NodeId) -> NodeId {
    self.nodes[id].next
  }

  pub fn prev(&self, id: NodeId) -> NodeId {
    self.nodes[id].prev
  }

  /// Nodes of the ring containing `start`, in `next` order.
  pub fn walk(&self, start: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    let mut focus = Some(start);
    std::iter::from_fn(move || {
      let current = focus?;
      let next = self.next(current);
      focus = if next == start { None } else { Some(next) };
      Some(current)
    })
  }

  pub fn equals(&self, a: NodeId, b: NodeId) -> bool {
    self.point(a) == self.point(b)
  }

  pub fn orient(&self, a: NodeId, b: NodeId, c: NodeId) -> Orientation {
    Orientation::new(self.point(a), self.point(b), self.point(c))
  }

  /// `p` lies inside or on the boundary of the counter-clockwise (or
  /// degenerate) triangle `abc`.
  pub fn in_triangle(&self, a: &Point<T, 2>, b: &Point<T, 2>, c: &Point<T, 2>, p: NodeId) -> bool {
    TriangleView::new_unchecked([a, b, c]).locate(self.point(p)) != PointLocation::Outside
  }

  /// Insert a new node after `last`, or start a new ring.
  pub fn insert_node(&mut self, i: usize, point: Point<T, 2>, last: Option<NodeId>) -> NodeId {
    let id = self.nodes.len();
    let (prev, next) = match last {
      None => (id, id),
      Some(last) => (last, self.next(last)),
    };
    self.nodes.push(Node {
      i,
      point,
      z: None,
      steiner: false,
      prev,
      next,
      prev_z: None,
      next_z: None,
    });
    if let Some(last) = last {
      self.nodes[next].prev = id;
      self.nodes[last].next = id;
    }
    id
  }

  /// Unlink `id` from both the ring and the z-order list.
  pub fn remove_node(&mut self, id: NodeId) {
    let Node {
      prev,
      next,
      prev_z,
      next_z,
      ..
    } = self.nodes[id];
    self.nodes[next].prev = prev;
    self.nodes[prev].next = next;
    if let Some(prev_z) = prev_z {
      self.nodes[prev_z].next_z = next_z;
    }
    if let Some(next_z) = next_z {
      self.nodes[next_z].prev_z = prev_z;
    }
  }

  /// Build a ring from `points[range]`. The ring winds counter-clockwise when
  /// `ccw` is set and clockwise otherwise, reversing the input when needed.
  /// A closing vertex equal to the first one is dropped.
  pub fn linked_list(
    &mut self,
    points: &[Point<T, 2>],
    range: Range<usize>,
    ccw: bool,
  ) -> Option<NodeId> {
    let mut last = None;
    if ccw == (signed_area(&points[range.clone()]) > T::zero()) {
      for i in range {
        last = Some(self.insert_node(i, points[i], last));
      }
    } else {
      for i in range.rev() {
        last = Some(self.insert_node(i, points[i], last));
      }
    }
    match last {
      Some(id) if self.equals(id, self.next(id)) => {
        self.remove_node(id);
        Some(self.next(id))
      }
      other => other,
    }
  }

  /// Drop duplicate and colinear vertices between `start` and `end`. Returns a
  /// node that is still linked.
  pub fn filter_points(&mut self, start: NodeId, end: Option<NodeId>) -> NodeId {
    let mut end = end.unwrap_or(start);
    let mut p = start;
    loop {
      let mut again = false;
      let next = self.next(p);
      if !self.nodes[p].steiner
        && (self.equals(p, next) || self.orient(self.prev(p), p, next).is_colinear())
      {
        self.remove_node(p);
        end = self.prev(p);
        p = end;
        if p == self.next(p) {
          break;
        }
        again = true;
      } else {
        p = next;
      }
      if !again && p == end {
        break;
      }
    }
    end
  }

  /// Link `a` to `b` with a pair of new edges. If both are on the same ring it
  /// splits in two; if they are on different rings the rings merge. Returns
  /// the copy of `b`, which lies on the ring that does not contain `a`.
  pub fn split_polygon(&mut self, a: NodeId, b: NodeId) -> NodeId {
    let a2 = self.insert_node(self.nodes[a].i, self.nodes[a].point, None);
    let b2 = self.insert_node(self.nodes[b].i, self.nodes[b].point, None);
    let an = self.next(a);
    let bp = self.prev(b);

    self.nodes[a].next = b;
    self.nodes[b].prev = a;

    self.nodes[a2].next = an;
    self.nodes[an].prev = a2;

    self.nodes[b2].next = a2;
    self.nodes[a2].prev = b2;

    self.nodes[bp].next = b2;
    self.nodes[b2].prev = bp;

    b2
  }

  /// Leftmost node of the ring, lowest on ties.
  pub fn leftmost(&self, start: NodeId) -> NodeId {
    self
      .walk(start)
      .min_by(|&a, &b| (self.x(a), self.y(a)).total_cmp(&(self.x(b), self.y(b))))
      .unwrap_or(start)
  }

  /// Segments `p1q1` and `p2q2` cross or touch.
  pub fn intersects(&self, p1: NodeId, q1: NodeId, p2: NodeId, q2: NodeId) -> bool {
    let o1 = self.orient(p1, q1, p2);
    let o2 = self.orient(p1, q1, q2);
    let o3 = self.orient(p2, q2, p1);
    let o4 = self.orient(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
      return true;
    }
    (o1.is_colinear() && self.on_segment(p1, p2, q1))
      || (o2.is_colinear() && self.on_segment(p1, q2, q1))
      || (o3.is_colinear() && self.on_segment(p2, p1, q2))
      || (o4.is_colinear() && self.on_segment(p2, q1, q2))
  }

  /// For colinear `p`, `q`, `r`: `q` lies within the bounding box of `pr`.
  fn on_segment(&self, p: NodeId, q: NodeId, r: NodeId) -> bool {
    let (px, py) = (self.x(p), self.y(p));
    let (qx, qy) = (self.x(q), self.y(q));
    let (rx, ry) = (self.x(r), self.y(r));
    qx <= px.max(rx) && qx >= px.min(rx) && qy <= py.max(ry) && qy >= py.min(ry)
  }

  /// The diagonal `ab` crosses an edge of the ring that does not touch it.
  pub fn intersects_polygon(&self, a: NodeId, b: NodeId) -> bool {
    let (ai, bi) = (self.nodes[a].i, self.nodes[b].i);
    self.walk(a).any(|p| {
      let next = self.next(p);
      let (pi, ni) = (self.nodes[p].i, self.nodes[next].i);
      pi != ai && ni != ai && pi != bi && ni != bi && self.intersects(p, next, a, b)
    })
  }

  /// The diagonal `ab` leaves `a` into the interior of the ring.
  pub fn locally_inside(&self, a: NodeId, b: NodeId) -> bool {
    let (prev, next) = (self.prev(a), self.next(a));
    if self.orient(prev, a, next).is_ccw() {
      !self.orient(a, b, next).is_ccw() && !self.orient(a, prev, b).is_ccw()
    } else {
      self.orient(a, b, prev).is_ccw() || self.orient(a, next, b).is_ccw()
    }
  }

  /// The midpoint of `ab` is inside the ring (even-odd rule).
  pub fn middle_inside(&self, a: NodeId, b: NodeId) -> bool {
    let two = T::from_constant(2);
    let px = (self.x(a) + self.x(b)) / two;
    let py = (self.y(a) + self.y(b)) / two;
    let mut inside = false;
    for p in self.walk(a) {
      let next = self.next(p);
      let (x0, y0, x1, y1) = (self.x(p), self.y(p), self.x(next), self.y(next));
      if (y0 > py) != (y1 > py) && y1 != y0 && px < (x1 - x0) * (py - y0) / (y1 - y0) + x0 {
        inside = !inside;
      }
    }
    inside
  }

  /// `ab` is a diagonal that lies inside the ring and splits it into two
  /// well formed rings.
  pub fn is_valid_diagonal(&self, a: NodeId, b: NodeId) -> bool {
    let bi = self.nodes[b].i;
    if self.nodes[self.next(a)].i == bi || self.nodes[self.prev(a)].i == bi {
      return false;
    }
    if self.intersects_polygon(a, b) {
      return false;
    }
    let visible = self.locally_inside(a, b)
      && self.locally_inside(b, a)
      && self.middle_inside(a, b)
      // No opposite-facing sectors.
      && (!self.orient(self.prev(a), a, self.prev(b)).is_colinear()
        || !self.orient(a, self.prev(b), b).is_colinear());
    // Zero-length diagonal between two reflex copies of the same point.
    let coincident = self.equals(a, b)
      && self.orient(self.prev(a), a, self.next(a)).is_cw()
      && self.orient(self.prev(b), b, self.next(b)).is_cw();
    visible || coincident
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pts(coords: &[(f64, f64)]) -> Vec<Point<f64, 2>> {
    coords.iter().map(|&c| Point::from(c)).collect()
  }

  fn indices(ring: &Ring<f64>, start: NodeId) -> Vec<usize> {
    ring.walk(start).map(|id| ring.node(id).i).collect()
  }

  #[test]
  fn winding_is_corrected() {
    let ccw = pts(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)]);
    let mut ring = Ring::with_capacity(8);
    let start = ring.linked_list(&ccw, 0..4, true).unwrap();
    assert_eq!(indices(&ring, start), vec![3, 0, 1, 2]);

    let start = ring.linked_list(&ccw, 0..4, false).unwrap();
    assert_eq!(indices(&ring, start), vec![0, 3, 2, 1]);
  }

  #[test]
  fn closing_duplicate_dropped() {
    let closed = pts(&[(0., 0.), (1., 0.), (1., 1.), (0., 0.)]);
    let mut ring = Ring::with_capacity(4);
    let start = ring.linked_list(&closed, 0..4, true).unwrap();
    assert_eq!(ring.walk(start).count(), 3);
  }

  #[test]
  fn remove_keeps_ring_closed() {
    let square = pts(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)]);
    let mut ring = Ring::with_capacity(4);
    let start = ring.linked_list(&square, 0..4, true).unwrap();
    let victim = ring.next(start);
    ring.remove_node(victim);
    assert_eq!(indices(&ring, start), vec![3, 1, 2]);
    assert_eq!(ring.prev(ring.next(start)), start);
  }

  #[test]
  fn filter_drops_colinear_and_duplicates() {
    let square = pts(&[(0., 0.), (1., 0.), (2., 0.), (2., 2.), (2., 2.), (0., 2.)]);
    let mut ring = Ring::with_capacity(6);
    let start = ring.linked_list(&square, 0..6, true).unwrap();
    let end = ring.filter_points(start, None);
    assert_eq!(ring.walk(end).count(), 4);
    let mut kept = indices(&ring, end);
    kept.sort_unstable();
    assert!(kept.contains(&0) && kept.contains(&2) && kept.contains(&5));
  }

  #[test]
  fn filter_collapses_flat_ring() {
    let flat = pts(&[(0., 0.), (1., 0.), (2., 0.), (3., 0.)]);
    let mut ring = Ring::with_capacity(4);
    let start = ring.linked_list(&flat, 0..4, true).unwrap();
    let end = ring.filter_points(start, None);
    assert_eq!(ring.next(end), end);
  }

  #[test]
  fn split_square_along_diagonal() {
    let square = pts(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)]);
    let mut ring = Ring::with_capacity(8);
    ring.linked_list(&square, 0..4, true).unwrap();
    // Node handles follow insertion order for a ccw input.
    let (a, b) = (0, 2);
    assert!(ring.is_valid_diagonal(a, b));
    let c = ring.split_polygon(a, b);
    assert_eq!(ring.walk(a).count(), 3);
    assert_eq!(ring.walk(c).count(), 3);
  }

  #[test]
  fn crossing_segments() {
    let quad = pts(&[(0., 0.), (2., 2.), (0., 2.), (2., 0.)]);
    let mut ring = Ring::with_capacity(4);
    let mut last = None;
    for (i, pt) in quad.iter().enumerate() {
      last = Some(ring.insert_node(i, *pt, last));
    }
    assert!(ring.intersects(0, 1, 2, 3));
    assert!(!ring.intersects(0, 2, 1, 3));
  }

  #[test]
  fn reflex_vertex_is_not_locally_inside() {
    // Arrow shape with a reflex vertex at index 3.
    let arrow = pts(&[(0., 0.), (4., 0.), (4., 4.), (2., 1.), (0., 4.)]);
    let mut ring = Ring::with_capacity(5);
    ring.linked_list(&arrow, 0..5, true).unwrap();
    assert!(ring.locally_inside(0, 2));
    assert!(!ring.is_valid_diagonal(2, 4));
    assert!(ring.is_valid_diagonal(3, 0));
  }

  #[test]
  fn leftmost_breaks_ties_by_y() {
    let square = pts(&[(1., 0.), (0., 1.), (0., 0.), (1., 1.)]);
    let mut ring = Ring::with_capacity(4);
    let mut last = None;
    for (i, pt) in square.iter().enumerate() {
      last = Some(ring.insert_node(i, *pt, last));
    }
    assert_eq!(ring.node(ring.leftmost(0)).i, 2);
  }
}
