//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration.
const CONFIG_FILE: &str = "config.ron";

/// Largest accepted `map.range`.
pub const MAX_MAP_RANGE: u32 = 4096;

/// Largest accepted side of the output image, in pixels.
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Seed construction settings.
    pub seed: SeedConfig,
    /// Noise lattice settings.
    pub noise: NoiseConfig,
    /// Map window and output settings.
    pub map: MapConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// How the map seed is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    /// Raw server identifier; the first half of the seed.
    pub server_id: String,
    /// Hours added to UTC before locating the week's Monday.
    pub rotation_offset_hours: i64,
    /// Fixed `YYYY-MM-DD` week key. `None` derives it from the current date.
    pub week: Option<String>,
}

/// Lattice spacing for the noise field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseConfig {
    /// Lattice spacing for elevation, temperature and rivers.
    pub grid_size: f64,
    /// Lattice spacing for humidity.
    pub humidity_grid_size: f64,
}

/// Map window and image output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Half-width of the square window around the center, in cells.
    pub range: u32,
    /// Center x coordinate.
    pub center_x: i64,
    /// Center y coordinate.
    pub center_y: i64,
    /// Pixels per cell in the output image.
    pub cell_size: u32,
    /// Worker threads for region generation (0 = one per CPU core).
    pub threads: usize,
    /// Output PNG path.
    pub output: PathBuf,
    /// Hotspot list, `x,y;x,y`.
    pub hotspots: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to the log directory.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            server_id: String::new(),
            rotation_offset_hours: 4,
            week: None,
        }
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            grid_size: 6.0,
            humidity_grid_size: 15.0,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            range: 50,
            center_x: 0,
            center_y: 0,
            cell_size: 8,
            threads: 0,
            output: PathBuf::from("biome_map.png"),
            hotspots: String::new(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

// --- Validation ---

impl Config {
    /// Checks that every setting is usable for generation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed.server_id.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "seed.server_id",
                reason: "must not be empty".to_string(),
            });
        }
        if !(-23..=23).contains(&self.seed.rotation_offset_hours) {
            return Err(ConfigError::Invalid {
                field: "seed.rotation_offset_hours",
                reason: format!("{} is outside -23..=23", self.seed.rotation_offset_hours),
            });
        }
        for (field, value) in [
            ("noise.grid_size", self.noise.grid_size),
            ("noise.humidity_grid_size", self.noise.humidity_grid_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} is not a positive number"),
                });
            }
        }
        if !(1..=MAX_MAP_RANGE).contains(&self.map.range) {
            return Err(ConfigError::Invalid {
                field: "map.range",
                reason: format!("{} is outside 1..={MAX_MAP_RANGE}", self.map.range),
            });
        }
        if self.map.cell_size == 0 {
            return Err(ConfigError::Invalid {
                field: "map.cell_size",
                reason: "must be at least 1".to_string(),
            });
        }
        let image_side = (2 * u64::from(self.map.range) + 1) * u64::from(self.map.cell_size);
        if image_side > u64::from(MAX_IMAGE_SIDE) {
            return Err(ConfigError::Invalid {
                field: "map.cell_size",
                reason: format!("image would be {image_side} px wide, limit is {MAX_IMAGE_SIDE}"),
            });
        }
        Ok(())
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(ConfigError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Config {
        let mut config = Config::default();
        config.seed.server_id = "serverA".to_string();
        config
    }

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("grid_size: 6.0"));
        assert!(ron_str.contains("rotation_offset_hours: 4"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = valid();
        config.seed.week = Some("2024-01-01".to_string());
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(seed: (server_id: \"s\"), map: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.noise, NoiseConfig::default());
        assert_eq!(config.seed.server_id, "s");
        assert_eq!(config.seed.rotation_offset_hours, 4);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = valid();
        config.map.range = 120;
        config.map.hotspots = "1,2;3,4".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(valid().validate().is_ok());
        assert!(matches!(
            Config::default().validate(),
            Err(ConfigError::Invalid { field: "seed.server_id", .. })
        ));

        let mut config = valid();
        config.map.range = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "map.range", .. })
        ));

        let mut config = valid();
        config.noise.grid_size = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "noise.grid_size", .. })
        ));

        let mut config = valid();
        config.seed.rotation_offset_hours = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_caps_map_size() {
        let mut config = valid();
        config.map.range = MAX_MAP_RANGE;
        config.map.cell_size = 1;
        assert!(config.validate().is_ok());

        config.map.range = MAX_MAP_RANGE + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "map.range", .. })
        ));

        config.map.range = u32::MAX;
        assert!(config.validate().is_err());

        // 101 cells at 163 px is 16463 px.
        let mut config = valid();
        config.map.cell_size = 163;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "map.cell_size", .. })
        ));
        config.map.cell_size = u32::MAX;
        assert!(config.validate().is_err());
    }
}
