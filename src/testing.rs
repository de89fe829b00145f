// Strategies for:
//  * star-shaped polygons
//  * square polygons with a grid of square holes
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::ops::Range;

use crate::data::{Point, Polygon};

/// Star-shaped, counter-clockwise polygons inside a square of side `scale`.
pub fn star_polygon(sizes: Range<usize>, scale: f64) -> impl Strategy<Value = Polygon<f64>> {
  (sizes, any::<u64>()).prop_map(move |(n, seed)| {
    let mut rng = SmallRng::seed_from_u64(seed);
    let star: Polygon<f64> = Polygon::random_star(n, &mut rng);
    let points = star.points().iter().map(|pt| pt.cast(|v| v * scale)).collect();
    Polygon::new_unchecked(points, Vec::new())
  })
}

/// Square with one square hole per grid cell. Each hole is shrunk by a random
/// margin so that it stays inside its cell.
pub fn holey_square(cells: Range<usize>) -> impl Strategy<Value = Polygon<f64>> {
  (cells.clone(), cells)
    .prop_flat_map(|(cols, rows)| {
      let margins = proptest::collection::vec((1u8..4, 1u8..4), cols * rows);
      (Just(cols), Just(rows), margins)
    })
    .prop_map(|(cols, rows, margins)| {
      let cell = 10.0;
      let (w, h) = (cols as f64 * cell, rows as f64 * cell);
      let mut points = vec![
        Point::new([0.0, 0.0]),
        Point::new([w, 0.0]),
        Point::new([w, h]),
        Point::new([0.0, h]),
      ];
      let mut holes = Vec::with_capacity(margins.len());
      for (k, (lo, hi)) in margins.into_iter().enumerate() {
        let x = (k % cols) as f64 * cell;
        let y = (k / cols) as f64 * cell;
        let (lo, hi) = (f64::from(lo), cell - f64::from(hi));
        holes.push(points.len());
        points.extend_from_slice(&[
          Point::new([x + lo, y + lo]),
          Point::new([x + hi, y + lo]),
          Point::new([x + hi, y + hi]),
          Point::new([x + lo, y + hi]),
        ]);
      }
      Polygon::new_unchecked(points, holes)
    })
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_strategy::proptest;

  #[proptest]
  fn stars_are_valid(#[strategy(star_polygon(3..50, 100.0))] p: Polygon<f64>) {
    prop_assert!(p.validate().is_ok());
    prop_assert!(p.signed_area() > 0.0);
  }

  #[proptest]
  fn holes_fit_their_cells(#[strategy(holey_square(1..4))] p: Polygon<f64>) {
    prop_assert!(p.validate().is_ok());
    prop_assert!(p.area() > 0.0);
    prop_assert_eq!(p.points().len(), 4 + 4 * p.holes().len());
  }
}
