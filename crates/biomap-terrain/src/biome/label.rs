//! Biome labels: the closed set of categories a map cell can take.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown biome name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown biome name: {0}")]
pub struct BiomeParseError(pub String);

/// The category assigned to one map coordinate.
///
/// ```
/// use biomap_terrain::BiomeLabel;
///
/// let label = "SNOW_MOUNTAIN".parse::<BiomeLabel>().unwrap();
/// assert_eq!(label, BiomeLabel::SnowMountain);
/// assert_eq!(label.to_string(), "SNOW_MOUNTAIN");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BiomeLabel {
    /// The reserved cell at `(0, 0)`.
    Origin,
    /// Hot peak.
    Volcano,
    /// Cold peak.
    SnowMountain,
    /// Temperate peak.
    Mountain,
    /// Highland of any climate.
    Hill,
    /// Hot, very humid midland.
    Jungle,
    /// Humid midland.
    Forest,
    /// Dry midland, or mild lowland with no other match.
    Plains,
    /// Lowland inside a river band.
    River,
    /// Hot, dry lowland.
    Desert,
    /// Cold lowland.
    Tundra,
    /// Humid lowland.
    Swamp,
}

impl BiomeLabel {
    /// Every label, in declaration order.
    pub const ALL: [BiomeLabel; 12] = [
        BiomeLabel::Origin,
        BiomeLabel::Volcano,
        BiomeLabel::SnowMountain,
        BiomeLabel::Mountain,
        BiomeLabel::Hill,
        BiomeLabel::Jungle,
        BiomeLabel::Forest,
        BiomeLabel::Plains,
        BiomeLabel::River,
        BiomeLabel::Desert,
        BiomeLabel::Tundra,
        BiomeLabel::Swamp,
    ];

    /// Upper-case name used in logs and map legends (e.g. `"SNOW_MOUNTAIN"`).
    pub fn as_str(self) -> &'static str {
        match self {
            BiomeLabel::Origin => "ORIGIN",
            BiomeLabel::Volcano => "VOLCANO",
            BiomeLabel::SnowMountain => "SNOW_MOUNTAIN",
            BiomeLabel::Mountain => "MOUNTAIN",
            BiomeLabel::Hill => "HILL",
            BiomeLabel::Jungle => "JUNGLE",
            BiomeLabel::Forest => "FOREST",
            BiomeLabel::Plains => "PLAINS",
            BiomeLabel::River => "RIVER",
            BiomeLabel::Desert => "DESERT",
            BiomeLabel::Tundra => "TUNDRA",
            BiomeLabel::Swamp => "SWAMP",
        }
    }

    /// Map color as RGB.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            BiomeLabel::Origin => (255, 0, 255),
            BiomeLabel::SnowMountain => (255, 255, 255),
            BiomeLabel::Mountain => (139, 69, 19),
            BiomeLabel::Hill => (205, 133, 63),
            BiomeLabel::Plains => (154, 245, 64),
            BiomeLabel::Desert => (245, 222, 179),
            BiomeLabel::River => (65, 105, 225),
            BiomeLabel::Forest => (46, 197, 46),
            BiomeLabel::Swamp => (116, 160, 40),
            BiomeLabel::Jungle => (0, 100, 0),
            BiomeLabel::Volcano => (255, 0, 0),
            BiomeLabel::Tundra => (176, 196, 222),
        }
    }

    /// Position in [`BiomeLabel::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BiomeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiomeLabel {
    type Err = BiomeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| BiomeParseError(s.to_string()))
    }
}
