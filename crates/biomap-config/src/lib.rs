//! Configuration for the biome map generator.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, MAX_IMAGE_SIDE, MAX_MAP_RANGE, MapConfig, NoiseConfig, SeedConfig,
};
pub use error::ConfigError;
