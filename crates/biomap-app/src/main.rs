//! `biomap`: render this week's biome map for a server.

use biomap_app::{AppError, PlatformDirs};
use biomap_config::{CliArgs, Config};
use clap::Parser;

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("biomap: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = match args.config {
        Some(ref root) => PlatformDirs::with_root(root),
        None => PlatformDirs::resolve()?,
    };

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;

    biomap_log::init_logging(Some(&dirs.log_dir), Some(&config));
    tracing::debug!(config_dir = %dirs.config_dir.display(), "configuration loaded");

    let result = biomap_app::run(&config, args.query.as_deref(), chrono::Utc::now())?;

    println!("seed:   {}", result.seed.seed());
    if let Some(((x, y), label)) = result.query {
        println!("biome:  ({x}, {y}) {label}");
    }
    println!(
        "map:    {} ({}x{} cells)",
        result.output.display(),
        result.grid.side(),
        result.grid.side()
    );
    Ok(())
}
