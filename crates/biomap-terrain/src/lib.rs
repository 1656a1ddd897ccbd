//! Deterministic biome maps: seeded lattice hashing, cosine-eased value noise,
//! and an ordered biome classifier, driven through a [`SeedSession`].

mod cache;
mod error;
mod noise;
mod region;
mod seed;
mod session;
mod weekly;

pub mod biome;

pub use biome::{BiomeClassifier, BiomeLabel, BiomeParseError, Climate, ElevationBand};
pub use cache::{LatticeKey, MemoCache};
pub use error::TerrainError;
pub use noise::{
    DEFAULT_GRID_SIZE, DEFAULT_HUMIDITY_GRID_SIZE, NoiseChannel, NoiseParams, ValueNoiseField,
    ease, interpolate,
};
pub use region::{
    BiomeCounts, MAX_REGION_RANGE, RegionGrid, default_thread_count, generate_region,
};
pub use seed::{hashed_float, lattice_key};
pub use session::SeedSession;
pub use weekly::{DEFAULT_ROTATION_OFFSET_HOURS, WeeklySeed, compose_seed, weekly_key};
