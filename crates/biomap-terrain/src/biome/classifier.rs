//! Biome classifier: combines elevation octaves, temperature, humidity and the
//! river fields into one [`BiomeLabel`] through an ordered decision tree.

use super::BiomeLabel;
use crate::noise::{NoiseChannel, ValueNoiseField};

/// Octave weights for elevation, coarse to fine.
const ELEVATION_WEIGHTS: [(NoiseChannel, f64, f64); 3] = [
    (NoiseChannel::Elevation1, 1.0, 0.7),
    (NoiseChannel::Elevation2, 2.0, 0.2),
    (NoiseChannel::Elevation3, 4.0, 0.1),
];

/// Temperature drop across 1000 rows of latitude.
const LATITUDE_COOLING: f64 = 0.4;

/// Open interval of river-field values that count as a river.
const RIVER_BAND: (f64, f64) = (0.48, 0.52);

/// Climate values at one coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Climate {
    /// Weighted sum of the three elevation octaves, in `[0, 1)`.
    pub elevation: f64,
    /// Temperature noise minus the latitude gradient. Unbounded.
    pub temperature: f64,
    /// Humidity noise, in `[0, 1)`.
    pub humidity: f64,
}

/// Elevation band; bands are tested from the top down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElevationBand {
    /// `elevation > 0.8`
    Peak,
    /// `0.7 < elevation <= 0.8`
    Highland,
    /// `0.3 < elevation <= 0.7`
    Midland,
    /// `elevation <= 0.3`
    Lowland,
}

impl ElevationBand {
    /// Band for an elevation value.
    pub fn of(elevation: f64) -> Self {
        if elevation > 0.8 {
            ElevationBand::Peak
        } else if elevation > 0.7 {
            ElevationBand::Highland
        } else if elevation > 0.3 {
            ElevationBand::Midland
        } else {
            ElevationBand::Lowland
        }
    }
}

fn in_river_band(value: f64) -> bool {
    value > RIVER_BAND.0 && value < RIVER_BAND.1
}

/// Applies the decision tree to a climate sample.
///
/// `rivers` yields `(river_v, river_h)` and is only called on the lowland
/// branch.
pub fn classify_climate(climate: Climate, rivers: impl FnOnce() -> (f64, f64)) -> BiomeLabel {
    let Climate {
        elevation,
        temperature,
        humidity,
    } = climate;

    match ElevationBand::of(elevation) {
        ElevationBand::Peak => {
            if temperature > 0.85 {
                BiomeLabel::Volcano
            } else if temperature < 0.3 {
                BiomeLabel::SnowMountain
            } else {
                BiomeLabel::Mountain
            }
        }
        ElevationBand::Highland => BiomeLabel::Hill,
        ElevationBand::Midland => {
            if humidity > 0.7 && temperature > 0.8 {
                BiomeLabel::Jungle
            } else if humidity > 0.4 {
                BiomeLabel::Forest
            } else {
                BiomeLabel::Plains
            }
        }
        ElevationBand::Lowland => {
            let (river_v, river_h) = rivers();
            if in_river_band(river_v) || in_river_band(river_h) {
                BiomeLabel::River
            } else if temperature > 0.7 && humidity < 0.3 {
                BiomeLabel::Desert
            } else if temperature < 0.3 {
                BiomeLabel::Tundra
            } else if humidity > 0.65 {
                BiomeLabel::Swamp
            } else {
                BiomeLabel::Plains
            }
        }
    }
}

/// Classifies coordinates against one seeded noise field.
#[derive(Clone, Copy, Debug)]
pub struct BiomeClassifier<'a> {
    field: ValueNoiseField<'a>,
}

impl<'a> BiomeClassifier<'a> {
    /// Creates a classifier over `field`.
    pub fn new(field: ValueNoiseField<'a>) -> Self {
        Self { field }
    }

    /// Samples elevation, temperature and humidity at `(x, y)`.
    pub fn climate(&self, x: i64, y: i64) -> Climate {
        let (fx, fy) = (x as f64, y as f64);

        let elevation = ELEVATION_WEIGHTS
            .iter()
            .map(|&(channel, scale, weight)| {
                self.field.sample(fx * scale, fy * scale, channel) * weight
            })
            .sum();
        let temperature =
            self.field.sample(fx, fy, NoiseChannel::Temperature) - (fy / 1000.0) * LATITUDE_COOLING;
        let humidity = self.field.sample(fx, fy, NoiseChannel::Humidity);

        Climate {
            elevation,
            temperature,
            humidity,
        }
    }

    /// Samples the two anisotropic river fields at `(x, y)`.
    pub fn rivers(&self, x: i64, y: i64) -> (f64, f64) {
        let (fx, fy) = (x as f64, y as f64);
        let river_v = self
            .field
            .sample(fx * 0.5, fy * 4.0, NoiseChannel::RiverVertical);
        let river_h = self
            .field
            .sample(fx * 4.0, fy * 0.5, NoiseChannel::RiverHorizontal);
        (river_v, river_h)
    }

    /// Classifies `(x, y)`. `(0, 0)` is always [`BiomeLabel::Origin`].
    pub fn classify(&self, x: i64, y: i64) -> BiomeLabel {
        if x == 0 && y == 0 {
            return BiomeLabel::Origin;
        }
        classify_climate(self.climate(x, y), || self.rivers(x, y))
    }
}
