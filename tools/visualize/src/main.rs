//! Diagnostic visualizer: renders a 2D fractal field over seeded OpenSimplex
//! to a greyscale PNG. Not part of the library; no tests.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fractal_core::{Fractal2D, FractalParams, Grid, Simplex};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Render fractal noise to a greyscale PNG")]
struct Args {
    /// OpenSimplex seed.
    #[arg(short, long, default_value_t = 42)]
    seed: u32,

    /// JSON params file; defaults apply to any missing key.
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Noise-space distance between neighbouring pixels.
    #[arg(long, default_value_t = 1.0 / 64.0)]
    step: f64,

    /// Output PNG path.
    #[arg(short, long, default_value = "data/debug/fractal.png")]
    output: PathBuf,
}

/// Normalised value [0, 1] → grayscale.
fn gray(v: f64) -> image::Luma<u8> {
    image::Luma([(v.clamp(0.0, 1.0) * 255.0) as u8])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let params = match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read params file {}", path.display()))?;
            FractalParams::from_json(&text)?
        }
        None => FractalParams::default(),
    };

    let (w, h) = (args.width as usize, args.height as usize);
    info!(seed = args.seed, width = w, height = h, "rendering fractal field");
    let base = Simplex::new(args.seed);
    let fbm = Fractal2D::new(&base, params);
    let grid = Grid::sample(&fbm, w, h, [0.0, 0.0], args.step);
    let shades = grid.normalized();

    let mut img = image::GrayImage::new(args.width, args.height);
    for r in 0..h {
        for c in 0..w {
            img.put_pixel(c as u32, r as u32, gray(shades[r * w + c]));
        }
    }

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    }
    img.save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    info!(path = %args.output.display(), min = grid.min_value(), max = grid.max_value(), "wrote image");

    Ok(())
}
