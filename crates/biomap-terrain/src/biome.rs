//! Biome system: the label set and the ordered classifier that assigns labels
//! from elevation, temperature, humidity and river noise.

mod classifier;
mod label;

pub use classifier::{BiomeClassifier, Climate, ElevationBand, classify_climate};
pub use label::{BiomeLabel, BiomeParseError};
