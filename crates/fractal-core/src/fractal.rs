//! Fractal (fBm) combination of a base noise source.
//!
//! fBm: sum of `layers` octaves, octave `i` sampled at frequency
//! `frequency · lacunarity^i` and weighted by `amplitude · gain^i`.
//! Each octave is displaced by `i · OCTAVE_OFFSET` on every axis before
//! scaling so octaves do not share the base field's origin.
use std::fmt;

use noise::NoiseFn;
use tracing::debug;

use crate::params::{FractalParams, OctaveParams};
use crate::source::NoiseSource;

/// Per-octave displacement added to every axis, scaled by the octave index.
pub const OCTAVE_OFFSET: f64 = 500.0;

/// Fractal noise generator over an `N`-dimensional base source.
///
/// Borrows its source; the source must outlive the generator. Immutable
/// after construction, so it is `Sync` whenever the source is.
pub struct Fractal<'a, S: ?Sized, const N: usize> {
    source: &'a S,
    params: OctaveParams,
}

pub type Fractal1D<'a, S> = Fractal<'a, S, 1>;
pub type Fractal2D<'a, S> = Fractal<'a, S, 2>;
pub type Fractal3D<'a, S> = Fractal<'a, S, 3>;
pub type Fractal4D<'a, S> = Fractal<'a, S, 4>;

impl<'a, S, const N: usize> Fractal<'a, S, N>
where
    S: NoiseSource<N> + ?Sized,
{
    /// Build a generator over `source`; unset params take their defaults.
    pub fn new(source: &'a S, params: FractalParams) -> Self {
        let params = params.resolve();
        debug!(
            dims = N,
            layers = params.layers,
            frequency = params.frequency,
            lacunarity = params.lacunarity,
            amplitude = params.amplitude,
            gain = params.gain,
            "fractal generator constructed"
        );
        Self { source, params }
    }

    /// Evaluate the fractal sum at `point`.
    ///
    /// No validation: non-positive `layers` yields `0.0`, and non-finite
    /// params or base values propagate through the arithmetic.
    pub fn sample(&self, point: [f64; N]) -> f64 {
        let p = &self.params;
        let mut sum = 0.0f64;
        let mut freq = p.frequency;
        let mut amp = p.amplitude;
        for i in 0..p.layers {
            let d = f64::from(i) * OCTAVE_OFFSET;
            let scaled = std::array::from_fn(|k| (point[k] + d) * freq);
            sum += self.source.sample(scaled) * amp;
            freq *= p.lacunarity;
            amp *= p.gain;
        }
        sum
    }

    pub fn params(&self) -> &OctaveParams {
        &self.params
    }

    pub fn source(&self) -> &'a S {
        self.source
    }
}

impl<S, const N: usize> NoiseSource<N> for Fractal<'_, S, N>
where
    S: NoiseSource<N> + ?Sized,
{
    #[inline]
    fn sample(&self, point: [f64; N]) -> f64 {
        Fractal::sample(self, point)
    }
}

impl<S, const N: usize> NoiseFn<f64, N> for Fractal<'_, S, N>
where
    S: NoiseSource<N> + ?Sized,
{
    #[inline]
    fn get(&self, point: [f64; N]) -> f64 {
        Fractal::sample(self, point)
    }
}

impl<S: ?Sized, const N: usize> Clone for Fractal<'_, S, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, const N: usize> Copy for Fractal<'_, S, N> {}

impl<S: ?Sized, const N: usize> fmt::Debug for Fractal<'_, S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fractal")
            .field("dims", &N)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
