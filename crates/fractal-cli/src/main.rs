/// Command-line sampler for fractal noise over seeded OpenSimplex.
/// Prints JSON to stdout; logs go to stderr (`RUST_LOG`, default `info`).

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use fractal_core::{sample_slice, Fractal2D, FractalParams, Grid, OctaveParams, Simplex};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fractal", about = "Sample fractal (fBm) noise over seeded OpenSimplex")]
#[command(group(clap::ArgGroup::new("mode").required(true).args(["point", "grid"])))]
struct Args {
    /// OpenSimplex seed for the base noise.
    #[arg(short, long, default_value_t = 0)]
    seed: u32,

    /// JSON params file, e.g. {"layers": 6, "gain": 0.6}. Flags below override it.
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Number of octaves.
    #[arg(long, allow_negative_numbers = true)]
    layers: Option<i32>,

    /// Initial frequency.
    #[arg(long, allow_negative_numbers = true)]
    frequency: Option<f64>,

    /// Per-octave frequency growth.
    #[arg(long, allow_negative_numbers = true)]
    lacunarity: Option<f64>,

    /// Initial amplitude.
    #[arg(long, allow_negative_numbers = true)]
    amplitude: Option<f64>,

    /// Per-octave amplitude decay.
    #[arg(long, allow_negative_numbers = true)]
    gain: Option<f64>,

    /// Sample a single point with 1 to 4 comma-separated coordinates.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    point: Option<Vec<f64>>,

    /// Sample a 2D grid of the given size, e.g. 64x32.
    #[arg(long)]
    grid: Option<GridSize>,

    /// Grid origin as x,y.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_value = "0,0")]
    origin: Vec<f64>,

    /// Grid spacing in noise space.
    #[arg(long, default_value_t = 0.05)]
    step: f64,
}

#[derive(Debug, Clone, Copy)]
struct GridSize {
    width: usize,
    height: usize,
}

impl FromStr for GridSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
        let parse = |v: &str| v.trim().parse::<usize>().map_err(|e| format!("bad grid size {s:?}: {e}"));
        Ok(Self { width: parse(w)?, height: parse(h)? })
    }
}

#[derive(Serialize)]
struct PointOutput<'a> {
    seed: u32,
    params: OctaveParams,
    point: &'a [f64],
    value: f64,
}

#[derive(Serialize)]
struct GridOutput {
    seed: u32,
    params: OctaveParams,
    origin: [f64; 2],
    step: f64,
    #[serde(flatten)]
    grid: Grid,
}

fn load_params(path: Option<&Path>) -> Result<FractalParams> {
    let Some(path) = path else {
        return Ok(FractalParams::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read params file {}", path.display()))?;
    FractalParams::from_json(&text)
        .with_context(|| format!("cannot parse params file {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let flags = FractalParams {
        layers: args.layers,
        frequency: args.frequency,
        lacunarity: args.lacunarity,
        amplitude: args.amplitude,
        gain: args.gain,
    };
    let params = load_params(args.params.as_deref())?.merge(flags);
    let resolved = params.resolve();
    let base = Simplex::new(args.seed);

    let json = if let Some(point) = &args.point {
        let value = sample_slice(&base, params, point)?;
        info!(dims = point.len(), value, "sampled point");
        serde_json::to_string(&PointOutput { seed: args.seed, params: resolved, point, value })?
    } else if let Some(size) = args.grid {
        let &[x, y] = args.origin.as_slice() else {
            bail!("--origin takes exactly two coordinates, got {}", args.origin.len());
        };
        let fbm = Fractal2D::new(&base, params);
        let grid = Grid::sample(&fbm, size.width, size.height, [x, y], args.step);
        info!(
            width = size.width,
            height = size.height,
            min = grid.min_value(),
            max = grid.max_value(),
            "sampled grid"
        );
        serde_json::to_string(&GridOutput {
            seed: args.seed,
            params: resolved,
            origin: [x, y],
            step: args.step,
            grid,
        })?
    } else {
        bail!("one of --point or --grid is required");
    };

    println!("{json}");
    Ok(())
}
