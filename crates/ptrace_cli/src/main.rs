//! ptrace - render a built-in scene to an image file.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ptrace_core::{load_params, RenderConfig};
use ptrace_renderer::{render, render_tiled_with_progress};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod scenes;

use scenes::SceneName;

#[derive(Debug, Parser)]
#[command(version, about = "Monte Carlo path tracer", long_about = None)]
struct Args {
    /// the scene to render
    #[arg(value_enum, default_value_t = SceneName::Sphere)]
    scene: SceneName,
    /// JSON file with render parameters
    #[arg(short, long)]
    params: Option<PathBuf>,
    /// where to write the image [default: ./<scene>.png]
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// render tiles in parallel on `max_cpus` threads
    #[arg(long)]
    tiled: bool,
    /// fixed random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// log per-pass progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut config = match &args.params {
        Some(path) => load_params(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("./{}.png", args.scene)));

    let (scene, camera) = scenes::build(args.scene, &config)?;
    log::info!(
        "Rendering scene '{}' ({}x{}) to: {}",
        args.scene,
        config.width,
        config.height,
        output.display()
    );
    let start = Instant::now();

    let image = if args.tiled {
        render_tiled_with_progress(&scene, &camera, &config, |_, samples| {
            log::info!("{}/{} samples per pixel", samples, config.samples_per_pixel);
        })?
    } else {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        render(&scene, &camera, &config, &mut rng)
    };

    image
        .save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("Time elapsed: {:.2?}", start.elapsed());

    Ok(())
}
