use thiserror::Error;

/// Errors raised by the surfaces around the fractal engine. Sampling itself
/// never fails; it follows IEEE float semantics.
#[derive(Debug, Error)]
pub enum FractalError {
    #[error("invalid fractal params: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported point dimension {got}, expected 1 to 4 coordinates")]
    Dimension { got: usize },
}
