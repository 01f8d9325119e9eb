use anyhow::{Context, Result};
use clap::Parser;
use glint_tracer::render;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;
mod output;
mod scene;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    info!("Starting Glint (seed {})", args.seed);

    let config = args.render_config();
    config.validate().context("Invalid render settings")?;

    // One sampler for scene placement and rendering, so the seed fixes the whole image
    let mut rng = StdRng::seed_from_u64(args.seed);

    let world = scene::build(args.scene, &mut rng);
    let camera = scene::camera(config.aspect_ratio())
        .build()
        .context("Invalid camera settings")?;

    let image = render(&camera, &world, &config, &mut rng)?;
    output::save_image(&image, &args.output)?;

    Ok(())
}
