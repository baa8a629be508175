use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::source::NoiseSource;

/// A 2D grid of noise samples, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub data: Vec<f64>,
    pub width: usize,
    pub height: usize,
}

impl Grid {
    /// Create a new grid filled with the given value.
    pub fn new(width: usize, height: usize, fill: f64) -> Self {
        Self { data: vec![fill; width * height], width, height }
    }

    /// Sample `source` on a `width × height` lattice. Cell `(r, c)` holds
    /// `source.sample([origin[0] + c·step, origin[1] + r·step])`.
    ///
    /// With the `threading` feature rows are filled in parallel; the result
    /// is identical either way.
    pub fn sample<S>(source: &S, width: usize, height: usize, origin: [f64; 2], step: f64) -> Self
    where
        S: NoiseSource<2> + Sync + ?Sized,
    {
        debug!(width, height, step, threaded = cfg!(feature = "threading"), "sampling grid");
        let mut grid = Self::new(width, height, 0.0);
        if width == 0 {
            return grid;
        }

        let fill_row = |r: usize, row: &mut [f64]| {
            let y = origin[1] + r as f64 * step;
            for (c, v) in row.iter_mut().enumerate() {
                *v = source.sample([origin[0] + c as f64 * step, y]);
            }
        };

        #[cfg(feature = "threading")]
        {
            use rayon::prelude::*;
            grid.data
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(r, row)| fill_row(r, row));
        }
        #[cfg(not(feature = "threading"))]
        {
            for (r, row) in grid.data.chunks_mut(width).enumerate() {
                fill_row(r, row);
            }
        }

        grid
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        self.data[row * self.width + col] = val;
    }

    pub fn min_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Values rescaled to [0, 1]. A flat grid maps to all zeros.
    pub fn normalized(&self) -> Vec<f64> {
        let lo = self.min_value();
        let range = self.max_value() - lo;
        if range > 0.0 {
            self.data.iter().map(|v| (v - lo) / range).collect()
        } else {
            vec![0.0; self.data.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractal::Fractal2D;
    use crate::params::FractalParams;
    use crate::simplex::Simplex;

    #[test]
    fn cells_follow_origin_and_step() {
        let coords = |[x, y]: [f64; 2]| x * 1000.0 + y;
        let g = Grid::sample(&coords, 3, 2, [1.0, 5.0], 0.5);
        assert_eq!(g.data.len(), 6);
        assert_eq!(g.get(0, 0), 1005.0);
        assert_eq!(g.get(0, 2), 2005.0);
        assert_eq!(g.get(1, 1), 1505.5);
    }

    #[test]
    fn grid_matches_pointwise_fractal() {
        let s = Simplex::new(42);
        let f = Fractal2D::new(&s, FractalParams::new().layers(6).frequency(0.05));
        let g = Grid::sample(&f, 16, 12, [-4.0, 2.0], 1.0);
        for r in 0..12 {
            for c in 0..16 {
                assert_eq!(g.get(r, c), f.sample([-4.0 + c as f64, 2.0 + r as f64]));
            }
        }
    }

    #[test]
    fn empty_grid_has_no_data() {
        let g = Grid::sample(&|_: [f64; 2]| 1.0, 0, 5, [0.0, 0.0], 1.0);
        assert!(g.data.is_empty());
    }

    #[test]
    fn normalized_spans_unit_interval() {
        let mut g = Grid::new(2, 2, 0.0);
        g.set(0, 0, -3.0);
        g.set(1, 1, 5.0);
        assert_eq!(g.normalized(), vec![0.0, 0.375, 0.375, 1.0]);
    }

    #[test]
    fn flat_grid_normalizes_to_zero() {
        let g = Grid::new(3, 3, 7.0);
        assert!(g.normalized().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn grid_serializes_dimensions_and_data() {
        let g = Grid::sample(&Simplex::new(3), 4, 3, [0.0, 0.0], 0.3);
        let json: serde_json::Value = serde_json::to_value(&g).unwrap();
        assert_eq!(json["width"], 4);
        assert_eq!(json["height"], 3);
        assert_eq!(json["data"].as_array().map(Vec::len), Some(12));
    }
}
