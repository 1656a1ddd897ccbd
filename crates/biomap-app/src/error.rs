//! Application error type.

use std::path::PathBuf;

use biomap_config::ConfigError;
use biomap_terrain::TerrainError;
use crate::debug_viz::{HotspotParseError, RenderError};

/// Errors that end a `biomap` run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    /// Loading or validating configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Biome generation failed.
    #[error(transparent)]
    Terrain(#[from] TerrainError),

    /// The hotspot list could not be parsed.
    #[error(transparent)]
    Hotspots(#[from] HotspotParseError),

    /// The map image would be too large.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The week key is not a `YYYY-MM-DD` date.
    #[error("invalid week `{0}`, expected YYYY-MM-DD")]
    InvalidWeek(String),

    /// The query is not an `x,y` pair of integers.
    #[error("invalid query `{0}`, expected x,y")]
    InvalidQuery(String),

    /// Writing the PNG failed.
    #[error("failed to write map image {}: {source}", path.display())]
    Image {
        /// Output path.
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },

    /// Creating the output file failed.
    #[error("failed to create {}: {source}", path.display())]
    Io {
        /// Output path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
