#![allow(dead_code)]
use polytri_earcut::data::{deviation, Point};

pub fn points(xs: &[f64], ys: &[f64]) -> Vec<Point<f64, 2>> {
  assert_eq!(xs.len(), ys.len());
  xs.iter().zip(ys).map(|(&x, &y)| Point::new([x, y])).collect()
}

pub fn rotated(points: &[Point<f64, 2>], angle: f64) -> Vec<Point<f64, 2>> {
  points.iter().map(|pt| pt.rotate(angle)).collect()
}

/// Triangles with each triple rotated to start at its smallest index, sorted.
pub fn canonical(triangles: &[[u32; 3]]) -> Vec<[u32; 3]> {
  let mut out: Vec<[u32; 3]> = triangles
    .iter()
    .map(|&[a, b, c]| {
      if a <= b && a <= c {
        [a, b, c]
      } else if b <= a && b <= c {
        [b, c, a]
      } else {
        [c, a, b]
      }
    })
    .collect();
  out.sort_unstable();
  out
}

/// Every index is in range, every vertex is used and the triangles cover the
/// polygon.
pub fn assert_cover(
  points: &[Point<f64, 2>],
  holes: &[usize],
  triangles: &[[u32; 3]],
  tolerance: f64,
) {
  assert!(triangles.iter().flatten().all(|&i| (i as usize) < points.len()));
  let mut used = vec![false; points.len()];
  for &i in triangles.iter().flatten() {
    used[i as usize] = true;
  }
  assert!(used.iter().all(|&u| u), "orphaned vertex");
  let diff = deviation(points, holes, triangles);
  assert!(diff < tolerance, "area deviation {}", diff);
}

pub fn square_with_hole() -> Vec<Point<f64, 2>> {
  points(
    &[0., 100., 100., 0., 20., 80., 80., 20.],
    &[0., 0., 100., 100., 20., 20., 80., 80.],
  )
}

/// Outer ring of the multi-hole fixtures; holes start at index 9.
const OUTER_X: [f64; 9] = [0., 0., 25., 65., 100., 90., 80., 50., 45.];
const OUTER_Y: [f64; 9] = [0., 40., 75., 90., 80., 10., 0., 25., 0.];

const HOLE_A_X: [f64; 5] = [10., 40., 42., 30., 10.];
const HOLE_A_Y: [f64; 5] = [10., 10., 50., 60., 30.];
const HOLE_B_X: [f64; 3] = [72., 60., 45.];
const HOLE_B_Y: [f64; 3] = [65., 85., 70.];
const HOLE_C_X: [f64; 4] = [75., 70., 75., 80.];
const HOLE_C_Y: [f64; 4] = [55., 45., 20., 50.];

fn outer_with(holes: &[(&[f64], &[f64])]) -> (Vec<Point<f64, 2>>, Vec<usize>) {
  let mut pts = points(&OUTER_X, &OUTER_Y);
  let mut starts = Vec::new();
  for (xs, ys) in holes {
    starts.push(pts.len());
    pts.extend(points(xs, ys));
  }
  (pts, starts)
}

pub fn one_hole_b() -> (Vec<Point<f64, 2>>, Vec<usize>) {
  outer_with(&[(&HOLE_C_X, &HOLE_C_Y)])
}

pub fn two_holes_a() -> (Vec<Point<f64, 2>>, Vec<usize>) {
  outer_with(&[(&HOLE_A_X, &HOLE_A_Y), (&HOLE_B_X, &HOLE_B_Y)])
}

pub fn two_holes_b() -> (Vec<Point<f64, 2>>, Vec<usize>) {
  outer_with(&[(&HOLE_A_X, &HOLE_A_Y), (&HOLE_C_X, &HOLE_C_Y)])
}

pub fn three_holes() -> (Vec<Point<f64, 2>>, Vec<usize>) {
  outer_with(&[
    (&HOLE_A_X, &HOLE_A_Y),
    (&HOLE_B_X, &HOLE_B_Y),
    (&HOLE_C_X, &HOLE_C_Y),
  ])
}

/// Hand outline, counter-clockwise, 59 vertices.
pub fn hand() -> Vec<Point<f64, 2>> {
  points(&HAND_X, &HAND_Y)
}

const HAND_X: [f64; 59] = [
  0.4962, 0.5571, 0.6061, 0.6449, 0.6271, 0.5932, 0.5689, 0.5398, 0.5005, 0.4860, 0.4817, 0.4935,
  0.4957, 0.4968, 0.4898, 0.4779, 0.4618, 0.4575, 0.4569, 0.4564, 0.4483, 0.4375, 0.4181, 0.4052,
  0.3961, 0.3815, 0.3691, 0.3514, 0.3298, 0.3347, 0.3487, 0.3546, 0.3724, 0.3605, 0.3390, 0.3142,
  0.2798, 0.2722, 0.2561, 0.2496, 0.2561, 0.2873, 0.2970, 0.3228, 0.3126, 0.2884, 0.2518, 0.2313,
  0.2151, 0.2130, 0.2351, 0.2507, 0.2894, 0.2991, 0.3061, 0.3131, 0.3239, 0.3363, 0.3562,
];

const HAND_Y: [f64; 59] = [
  0.2086, 0.3199, 0.4158, 0.5009, 0.5344, 0.5127, 0.4692, 0.4240, 0.4339, 0.5018, 0.5697, 0.6638,
  0.7335, 0.7833, 0.8403, 0.8557, 0.8502, 0.8222, 0.7706, 0.7362, 0.6783, 0.6122, 0.5950, 0.6421,
  0.7145, 0.7733, 0.8620, 0.8855, 0.8665, 0.8176, 0.7443, 0.6882, 0.5860, 0.5860, 0.6412, 0.7018,
  0.8113, 0.8158, 0.8086, 0.7869, 0.7543, 0.6566, 0.6222, 0.5371, 0.5308, 0.5579, 0.6267, 0.6575,
  0.6566, 0.6213, 0.5724, 0.5353, 0.4611, 0.4204, 0.3633, 0.3190, 0.2647, 0.2357, 0.2176,
];

/// Diagonal-engine triangulation of [`hand`].
pub const HAND_DIAGONAL: [[u32; 3]; 57] = [
  [1, 58, 0],
  [2, 58, 1],
  [3, 58, 2],
  [5, 3, 4],
  [6, 3, 5],
  [7, 3, 6],
  [12, 10, 11],
  [13, 10, 12],
  [14, 10, 13],
  [15, 10, 14],
  [16, 10, 15],
  [17, 10, 16],
  [18, 10, 17],
  [19, 10, 18],
  [20, 10, 19],
  [21, 10, 20],
  [22, 10, 21],
  [25, 23, 24],
  [27, 25, 26],
  [28, 25, 27],
  [29, 25, 28],
  [30, 25, 29],
  [31, 25, 30],
  [32, 25, 31],
  [35, 33, 34],
  [37, 35, 36],
  [38, 35, 37],
  [39, 35, 38],
  [40, 35, 39],
  [41, 35, 40],
  [42, 35, 41],
  [43, 35, 42],
  [47, 45, 46],
  [48, 45, 47],
  [49, 45, 48],
  [50, 45, 49],
  [51, 45, 50],
  [52, 45, 51],
  [53, 45, 52],
  [54, 45, 53],
  [55, 45, 54],
  [56, 45, 55],
  [57, 45, 56],
  [58, 45, 57],
  [7, 58, 3],
  [8, 58, 7],
  [9, 58, 8],
  [10, 58, 9],
  [22, 58, 10],
  [23, 58, 22],
  [25, 58, 23],
  [32, 58, 25],
  [33, 58, 32],
  [35, 58, 33],
  [43, 58, 35],
  [44, 58, 43],
  [45, 58, 44],
];
