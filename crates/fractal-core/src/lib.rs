//! Fractal (fBm) noise: layered octaves of an arbitrary base noise source in
//! one to four dimensions.
//!
//! ```
//! use fractal_core::{Fractal2D, FractalParams, Simplex};
//!
//! let base = Simplex::new(42);
//! let fbm = Fractal2D::new(&base, FractalParams::new().layers(6).gain(0.6));
//! let height = fbm.sample([12.5, -3.0]);
//! assert!(height.is_finite());
//! ```
pub mod error;
pub mod fractal;
pub mod grid;
pub mod params;
pub mod simplex;
pub mod source;

pub use error::FractalError;
pub use fractal::{Fractal, Fractal1D, Fractal2D, Fractal3D, Fractal4D, OCTAVE_OFFSET};
pub use grid::Grid;
pub use params::{FractalParams, OctaveParams, SentinelParams};
pub use simplex::{sample_slice, Simplex};
pub use source::{NoiseSource, Source};
