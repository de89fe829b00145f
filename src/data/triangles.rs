use crate::VertexIndex;

/// Append-only list of index triples, sized up front.
///
/// A simple polygon of `n` vertices has at most `n - 2` triangles and merging
/// `h` holes adds at most two more per hole. Colinear and duplicate vertices,
/// including bridge copies that end up colinear, are filtered out, so the
/// actual count can be lower. Pushing past the capacity is a logic error and
/// trips a debug assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangleBuffer<I> {
  triangles: Vec<[I; 3]>,
  capacity: usize,
}

impl<I: VertexIndex> TriangleBuffer<I> {
  pub fn with_capacity(capacity: usize) -> TriangleBuffer<I> {
    TriangleBuffer {
      triangles: Vec::with_capacity(capacity),
      capacity,
    }
  }

  /// Capacity for `vertices` vertices of which some start `holes` holes.
  pub fn for_polygon(vertices: usize, holes: usize) -> TriangleBuffer<I> {
    TriangleBuffer::with_capacity((vertices + 2 * holes).saturating_sub(2))
  }

  /// Indices must have been checked against the vertex count.
  pub fn push(&mut self, a: usize, b: usize, c: usize) {
    debug_assert!(
      self.triangles.len() < self.capacity,
      "triangle buffer overflow: capacity {}",
      self.capacity
    );
    self
      .triangles
      .push([I::truncate(a), I::truncate(b), I::truncate(c)]);
  }

  pub fn len(&self) -> usize {
    self.triangles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn as_slice(&self) -> &[[I; 3]] {
    &self.triangles
  }

  pub fn iter(&self) -> impl Iterator<Item = &[I; 3]> + '_ {
    self.triangles.iter()
  }

  pub fn into_vec(self) -> Vec<[I; 3]> {
    self.triangles
  }
}
