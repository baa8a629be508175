//! Base noise capability consumed (and implemented) by fractal generators.
//!
//! `NoiseSource<N>` is a pure function from an `N`-dimensional point to a
//! real value. Anything deterministic and side-effect free qualifies: a
//! closure, a `noise`-crate generator behind [`Source`], or another
//! [`Fractal`](crate::fractal::Fractal).
use noise::NoiseFn;

/// Something that can produce `N`-dimensional noise.
pub trait NoiseSource<const N: usize> {
    /// Sample the noise at `point`.
    fn sample(&self, point: [f64; N]) -> f64;
}

impl<F, const N: usize> NoiseSource<N> for F
where
    F: Fn([f64; N]) -> f64,
{
    #[inline]
    fn sample(&self, point: [f64; N]) -> f64 {
        self(point)
    }
}

/// Adapter exposing a `noise::NoiseFn` as a [`NoiseSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Source<F>(pub F);

impl<F> Source<F> {
    pub fn new(inner: F) -> Self {
        Self(inner)
    }

    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F, const N: usize> NoiseSource<N> for Source<F>
where
    F: NoiseFn<f64, N>,
{
    #[inline]
    fn sample(&self, point: [f64; N]) -> f64 {
        self.0.get(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise::{OpenSimplex, Perlin};

    #[test]
    fn closure_is_a_source() {
        let sum = |[x, y]: [f64; 2]| x + y;
        assert_eq!(sum.sample([1.5, 2.0]), 3.5);
    }

    #[test]
    fn source_matches_wrapped_noise_fn() {
        let src = Source::new(Perlin::new(7));
        for &p in &[[0.1, 0.2, 0.3], [12.5, -3.25, 8.0], [-100.0, 0.5, 1e3]] {
            assert_eq!(src.sample(p), src.0.get(p));
        }
    }

    #[test]
    fn source_works_through_trait_object() {
        let src = Source::new(OpenSimplex::new(3));
        let dyn_src: &dyn NoiseSource<4> = &src;
        let v = dyn_src.sample([0.3, 0.7, 1.1, 2.9]);
        assert!(v.is_finite());
        assert_eq!(v, src.0.get([0.3, 0.7, 1.1, 2.9]));
    }
}
