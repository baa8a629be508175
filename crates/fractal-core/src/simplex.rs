//! Seeded OpenSimplex base noise for 1 to 4 dimensions.
//!
//! 2D, 3D and 4D delegate to `noise::OpenSimplex`. 1D samples the 2D field
//! along the `y = 0` line.
use noise::{NoiseFn, OpenSimplex, Seedable};

use crate::error::FractalError;
use crate::fractal::Fractal;
use crate::params::FractalParams;
use crate::source::NoiseSource;

#[derive(Debug, Clone)]
pub struct Simplex {
    noise: OpenSimplex,
}

impl Simplex {
    pub fn new(seed: u32) -> Self {
        Self { noise: OpenSimplex::new(seed) }
    }

    pub fn seed(&self) -> u32 {
        self.noise.seed()
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseSource<1> for Simplex {
    #[inline]
    fn sample(&self, [x]: [f64; 1]) -> f64 {
        self.noise.get([x, 0.0])
    }
}

impl NoiseSource<2> for Simplex {
    #[inline]
    fn sample(&self, point: [f64; 2]) -> f64 {
        self.noise.get(point)
    }
}

impl NoiseSource<3> for Simplex {
    #[inline]
    fn sample(&self, point: [f64; 3]) -> f64 {
        self.noise.get(point)
    }
}

impl NoiseSource<4> for Simplex {
    #[inline]
    fn sample(&self, point: [f64; 4]) -> f64 {
        self.noise.get(point)
    }
}

/// Sample a fractal over `source` at a point whose arity is only known at
/// runtime (CLI arguments, JS arrays).
pub fn sample_slice<S>(source: &S, params: FractalParams, point: &[f64]) -> Result<f64, FractalError>
where
    S: NoiseSource<1> + NoiseSource<2> + NoiseSource<3> + NoiseSource<4>,
{
    let value = match *point {
        [x] => Fractal::<S, 1>::new(source, params).sample([x]),
        [x, y] => Fractal::<S, 2>::new(source, params).sample([x, y]),
        [x, y, z] => Fractal::<S, 3>::new(source, params).sample([x, y, z]),
        [x, y, z, w] => Fractal::<S, 4>::new(source, params).sample([x, y, z, w]),
        _ => return Err(FractalError::Dimension { got: point.len() }),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dimension_is_the_y_zero_line() {
        let s = Simplex::new(4);
        let raw = OpenSimplex::new(4);
        for x in [-3.5, 0.0, 0.125, 17.0] {
            assert_eq!(NoiseSource::<1>::sample(&s, [x]), raw.get([x, 0.0]));
        }
    }

    #[test]
    fn seed_changes_field() {
        let a = Simplex::new(1);
        let b = Simplex::new(2);
        assert_eq!(a.seed(), 1);
        let p = [0.37, 1.91, -2.2];
        assert_ne!(NoiseSource::<3>::sample(&a, p), NoiseSource::<3>::sample(&b, p));
    }

    #[test]
    fn slice_dispatch_matches_typed_generator() {
        let s = Simplex::new(8);
        let params = FractalParams::new().layers(5).frequency(0.3);
        let typed = Fractal::<Simplex, 3>::new(&s, params).sample([1.0, 2.0, 3.0]);
        assert_eq!(sample_slice(&s, params, &[1.0, 2.0, 3.0]).unwrap(), typed);
        assert!(sample_slice(&s, params, &[0.5]).unwrap().is_finite());
        assert!(sample_slice(&s, params, &[0.5, 1.0, 1.5, 2.0]).unwrap().is_finite());
    }

    #[test]
    fn slice_dispatch_rejects_bad_arity() {
        let s = Simplex::default();
        let empty: &[f64] = &[];
        for point in [empty, &[1.0, 2.0, 3.0, 4.0, 5.0]] {
            match sample_slice(&s, FractalParams::new(), point) {
                Err(FractalError::Dimension { got }) => assert_eq!(got, point.len()),
                other => panic!("expected dimension error, got {other:?}"),
            }
        }
    }

    #[test]
    fn fractal_over_simplex_stays_finite() {
        let s = Simplex::new(0);
        let f = Fractal::<Simplex, 2>::new(&s, FractalParams::new().layers(8));
        for r in 0..16 {
            for c in 0..16 {
                let v = f.sample([c as f64 * 0.37, r as f64 * 0.41]);
                assert!(v.is_finite(), "non-finite value at ({r}, {c})");
            }
        }
    }
}
