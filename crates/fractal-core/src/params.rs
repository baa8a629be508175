use serde::{Deserialize, Serialize};

use crate::error::FractalError;

pub const DEFAULT_LAYERS: i32 = 4;
pub const DEFAULT_FREQUENCY: f64 = 1.0;
pub const DEFAULT_LACUNARITY: f64 = 2.0;
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
pub const DEFAULT_GAIN: f64 = 0.5;

/// Caller-facing fractal configuration. `None` fields fall back to the
/// defaults when resolved; explicit values (zero included) are kept verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FractalParams {
    /// Number of octaves to sum. Non-positive means no octaves at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<i32>,
    /// Initial frequency multiplier applied to input coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Per-octave frequency growth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lacunarity: Option<f64>,
    /// Weight of the first octave.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
    /// Per-octave amplitude decay (persistence).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,
}

impl FractalParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(mut self, layers: i32) -> Self {
        self.layers = Some(layers);
        self
    }

    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = Some(lacunarity);
        self
    }

    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = Some(amplitude);
        self
    }

    pub fn gain(mut self, gain: f64) -> Self {
        self.gain = Some(gain);
        self
    }

    /// Parse params from a JSON object such as `{"layers": 6, "gain": 0.6}`.
    pub fn from_json(json: &str) -> Result<Self, FractalError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay the fields set in `other` on top of `self`.
    pub fn merge(self, other: FractalParams) -> Self {
        Self {
            layers: other.layers.or(self.layers),
            frequency: other.frequency.or(self.frequency),
            lacunarity: other.lacunarity.or(self.lacunarity),
            amplitude: other.amplitude.or(self.amplitude),
            gain: other.gain.or(self.gain),
        }
    }

    /// Fill every unset field with its default.
    pub fn resolve(&self) -> OctaveParams {
        OctaveParams {
            layers: self.layers.unwrap_or(DEFAULT_LAYERS),
            frequency: self.frequency.unwrap_or(DEFAULT_FREQUENCY),
            lacunarity: self.lacunarity.unwrap_or(DEFAULT_LACUNARITY),
            amplitude: self.amplitude.unwrap_or(DEFAULT_AMPLITUDE),
            gain: self.gain.unwrap_or(DEFAULT_GAIN),
        }
    }
}

/// Fully resolved octave parameters held by a generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OctaveParams {
    pub layers: i32,
    pub frequency: f64,
    pub lacunarity: f64,
    pub amplitude: f64,
    pub gain: f64,
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYERS,
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            amplitude: DEFAULT_AMPLITUDE,
            gain: DEFAULT_GAIN,
        }
    }
}

impl From<OctaveParams> for FractalParams {
    fn from(p: OctaveParams) -> Self {
        Self {
            layers: Some(p.layers),
            frequency: Some(p.frequency),
            lacunarity: Some(p.lacunarity),
            amplitude: Some(p.amplitude),
            gain: Some(p.gain),
        }
    }
}

/// Zero-as-unset parameter layout: any field left at zero picks up its
/// default. A literal zero cannot be requested through this type; use
/// [`FractalParams`] for that.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentinelParams {
    pub layers: i32,
    pub frequency: f64,
    pub lacunarity: f64,
    pub amplitude: f64,
    pub gain: f64,
}

impl From<SentinelParams> for FractalParams {
    fn from(p: SentinelParams) -> Self {
        let set = |v: f64| (v != 0.0).then_some(v);
        Self {
            layers: (p.layers != 0).then_some(p.layers),
            frequency: set(p.frequency),
            lacunarity: set(p.lacunarity),
            amplitude: set(p.amplitude),
            gain: set(p.gain),
        }
    }
}
