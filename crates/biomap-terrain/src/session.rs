//! Seed session: owns the active seed and the lattice cache, and is the entry
//! point for per-coordinate biome queries.

use crate::biome::{BiomeClassifier, BiomeLabel, Climate};
use crate::cache::MemoCache;
use crate::error::TerrainError;
use crate::noise::{NoiseChannel, NoiseParams, ValueNoiseField};

/// A biome generator bound to one seed at a time.
///
/// Queries take `&self` and may run from many threads at once. Reseeding takes
/// `&mut self`, so no query from the previous seed can still be in flight when
/// the cache is cleared.
#[derive(Debug, Default)]
pub struct SeedSession {
    seed: Option<String>,
    cache: MemoCache,
    params: NoiseParams,
}

impl SeedSession {
    /// Creates an uninitialized session with default lattice spacing.
    pub fn new() -> Self {
        Self::with_params(NoiseParams::default())
    }

    /// Creates an uninitialized session with custom lattice spacing.
    pub fn with_params(params: NoiseParams) -> Self {
        Self {
            seed: None,
            cache: MemoCache::new(),
            params: params.sanitized(),
        }
    }

    /// Sets the active seed and discards every cached lattice sample.
    pub fn initialize(&mut self, seed: impl Into<String>) {
        let seed = seed.into();
        let discarded = self.cache.len();
        self.cache.clear();
        tracing::info!(%seed, discarded, "seed session initialized");
        self.seed = Some(seed);
    }

    /// The active seed, if `initialize` has been called.
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// Returns `true` once a seed is active.
    pub fn is_initialized(&self) -> bool {
        self.seed.is_some()
    }

    /// The lattice spacing in use.
    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// Number of lattice samples memoized under the current seed.
    pub fn cached_samples(&self) -> usize {
        self.cache.len()
    }

    /// The noise field for the active seed.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::NotInitialized`] if no seed is active.
    pub fn field(&self) -> Result<ValueNoiseField<'_>, TerrainError> {
        let seed = self.seed.as_deref().ok_or(TerrainError::NotInitialized)?;
        Ok(ValueNoiseField::new(seed, &self.cache, self.params))
    }

    /// Classifies `(x, y)` under the active seed.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::NotInitialized`] if no seed is active, even for
    /// the origin.
    pub fn get_biome(&self, x: i64, y: i64) -> Result<BiomeLabel, TerrainError> {
        let classifier = BiomeClassifier::new(self.field()?);
        Ok(classifier.classify(x, y))
    }

    /// Elevation, temperature and humidity at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::NotInitialized`] if no seed is active.
    pub fn climate(&self, x: i64, y: i64) -> Result<Climate, TerrainError> {
        let classifier = BiomeClassifier::new(self.field()?);
        Ok(classifier.climate(x, y))
    }

    /// Samples one noise channel at an arbitrary point on its default lattice.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::NotInitialized`] if no seed is active and
    /// [`TerrainError::InvalidCoordinate`] if `x` or `y` is not finite.
    pub fn sample_noise(&self, x: f64, y: f64, channel: NoiseChannel) -> Result<f64, TerrainError> {
        let field = self.field()?;
        if !x.is_finite() || !y.is_finite() {
            return Err(TerrainError::InvalidCoordinate { x, y });
        }
        Ok(field.sample(x, y, channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "serverA:2024-01-01";

    #[test]
    fn test_uninitialized_fails() {
        let session = SeedSession::new();
        assert_eq!(session.get_biome(5, 5), Err(TerrainError::NotInitialized));
        assert_eq!(session.get_biome(0, 0), Err(TerrainError::NotInitialized));
        assert!(!session.is_initialized());
    }

    #[test]
    fn test_origin_scenario() {
        let mut session = SeedSession::new();
        session.initialize(SEED);
        assert_eq!(session.get_biome(0, 0), Ok(BiomeLabel::Origin));
        assert_eq!(session.get_biome(0, 0), Ok(BiomeLabel::Origin));
        let first = session.get_biome(5, 5).unwrap();
        let second = session.get_biome(5, 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reinitialize_clears_cache() {
        let mut session = SeedSession::new();
        session.initialize("first");
        session.get_biome(17, -4).unwrap();
        assert!(session.cached_samples() > 0);

        session.initialize("second");
        assert_eq!(session.cached_samples(), 0);
        assert_eq!(session.seed(), Some("second"));
    }

    #[test]
    fn test_same_seed_reinitialize_reproduces() {
        let mut session = SeedSession::new();
        session.initialize(SEED);
        let before: Vec<_> = (-20..20).map(|x| session.get_biome(x, 3).unwrap()).collect();
        session.initialize(SEED);
        let after: Vec<_> = (-20..20).map(|x| session.get_biome(x, 3).unwrap()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sample_noise_rejects_non_finite() {
        let mut session = SeedSession::new();
        assert_eq!(
            session.sample_noise(1.0, 1.0, NoiseChannel::Temperature),
            Err(TerrainError::NotInitialized)
        );
        session.initialize(SEED);
        assert!(matches!(
            session.sample_noise(f64::NAN, 0.0, NoiseChannel::Temperature),
            Err(TerrainError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            session.sample_noise(0.0, f64::INFINITY, NoiseChannel::Humidity),
            Err(TerrainError::InvalidCoordinate { .. })
        ));
        let v = session.sample_noise(2.5, -3.75, NoiseChannel::Humidity).unwrap();
        assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn test_get_biome_total_on_fine_lattice() {
        let mut session = SeedSession::with_params(NoiseParams {
            grid_size: 1.0,
            humidity_grid_size: 1.0,
        });
        session.initialize(SEED);
        for (x, y) in [
            (i64::MAX, 1),
            (1, i64::MAX),
            (i64::MAX, i64::MAX),
            (i64::MIN, i64::MIN),
            (i64::MIN, i64::MAX),
        ] {
            let first = session.get_biome(x, y).unwrap();
            assert_eq!(session.get_biome(x, y), Ok(first));
        }
    }

    #[test]
    fn test_session_is_sync() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<SeedSession>();
    }
}
