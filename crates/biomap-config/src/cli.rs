//! Command-line argument parsing for the biome map generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Biome map command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "biomap", about = "Deterministic weekly biome map generator")]
pub struct CliArgs {
    /// Server identifier used as the first half of the seed.
    #[arg(long)]
    pub server_id: Option<String>,

    /// Fixed week key (YYYY-MM-DD) instead of the current week.
    #[arg(long)]
    pub week: Option<String>,

    /// Half-width of the map window in cells.
    #[arg(long)]
    pub range: Option<u32>,

    /// Center x coordinate.
    #[arg(long, allow_hyphen_values = true)]
    pub center_x: Option<i64>,

    /// Center y coordinate.
    #[arg(long, allow_hyphen_values = true)]
    pub center_y: Option<i64>,

    /// Pixels per cell in the output image.
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Worker threads (0 = one per CPU core).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Output PNG path.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Hotspots to highlight, `x,y;x,y`.
    #[arg(long, allow_hyphen_values = true)]
    pub hotspots: Option<String>,

    /// Print the biome at one coordinate, `x,y`.
    #[arg(long, allow_hyphen_values = true)]
    pub query: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref id) = args.server_id {
            self.seed.server_id = id.clone();
        }
        if let Some(ref week) = args.week {
            self.seed.week = Some(week.clone());
        }
        if let Some(range) = args.range {
            self.map.range = range;
        }
        if let Some(x) = args.center_x {
            self.map.center_x = x;
        }
        if let Some(y) = args.center_y {
            self.map.center_y = y;
        }
        if let Some(size) = args.cell_size {
            self.map.cell_size = size;
        }
        if let Some(threads) = args.threads {
            self.map.threads = threads;
        }
        if let Some(ref output) = args.output {
            self.map.output = output.clone();
        }
        if let Some(ref hotspots) = args.hotspots {
            self.map.hotspots = hotspots.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
