//! Write-once memo table for lattice samples.
//!
//! Shared by every noise lookup of a session. Entries are never evicted; the
//! whole table is discarded when the session is reseeded.

use dashmap::DashMap;

use crate::noise::NoiseChannel;

/// Cache key for one lattice sample.
///
/// The seed is not part of the key: a [`MemoCache`] only ever holds samples
/// for the seed of the session that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LatticeKey {
    /// Lattice column.
    pub x: i64,
    /// Lattice row.
    pub y: i64,
    /// Noise channel (hash salt).
    pub channel: NoiseChannel,
}

impl LatticeKey {
    /// Creates a key for the lattice point `(x, y)` on `channel`.
    pub fn new(x: i64, y: i64, channel: NoiseChannel) -> Self {
        Self { x, y, channel }
    }
}

/// Concurrent memo table mapping [`LatticeKey`] to its hashed value.
///
/// A key is computed at most once per session: a miss takes the shard write
/// lock through the entry API, so a concurrent miss on the same key waits and
/// then observes the stored value.
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: DashMap<LatticeKey, f64>,
}

impl MemoCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the cached value for `key`, if any.
    pub fn get(&self, key: &LatticeKey) -> Option<f64> {
        self.entries.get(key).map(|v| *v)
    }

    /// Stores `value` unless `key` is already populated.
    ///
    /// Returns the value that is stored after the call, which is the earlier
    /// value if the key was already present.
    pub fn put(&self, key: LatticeKey, value: f64) -> f64 {
        *self.entries.entry(key).or_insert(value)
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(&self, key: LatticeKey, compute: impl FnOnce() -> f64) -> f64 {
        // Read-locked fast path; most lookups hit.
        if let Some(value) = self.get(&key) {
            return value;
        }
        *self.entries.entry(key).or_insert_with(compute)
    }

    /// Discards every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached samples.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_miss_then_hit() {
        let cache = MemoCache::new();
        let key = LatticeKey::new(1, 2, NoiseChannel::Temperature);
        assert_eq!(cache.get(&key), None);
        cache.put(key, 0.25);
        assert_eq!(cache.get(&key), Some(0.25));
    }

    #[test]
    fn test_put_is_write_once() {
        let cache = MemoCache::new();
        let key = LatticeKey::new(0, 0, NoiseChannel::Humidity);
        assert_eq!(cache.put(key, 0.1), 0.1);
        assert_eq!(cache.put(key, 0.9), 0.1, "Second put must not overwrite");
        assert_eq!(cache.get(&key), Some(0.1));
    }

    #[test]
    fn test_channels_are_distinct_keys() {
        let cache = MemoCache::new();
        cache.put(LatticeKey::new(5, 5, NoiseChannel::RiverVertical), 0.3);
        assert_eq!(
            cache.get(&LatticeKey::new(5, 5, NoiseChannel::RiverHorizontal)),
            None
        );
    }

    #[test]
    fn test_clear_discards_everything() {
        let cache = MemoCache::new();
        for x in 0..10 {
            cache.put(LatticeKey::new(x, 0, NoiseChannel::Elevation1), 0.5);
        }
        assert_eq!(cache.len(), 10);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&LatticeKey::new(3, 0, NoiseChannel::Elevation1)), None);
    }

    #[test]
    fn test_get_or_insert_computes_once() {
        let cache = MemoCache::new();
        let calls = AtomicUsize::new(0);
        let key = LatticeKey::new(-3, 8, NoiseChannel::Elevation2);
        for _ in 0..5 {
            let v = cache.get_or_insert_with(key, || {
                calls.fetch_add(1, Ordering::Relaxed);
                0.75
            });
            assert_eq!(v, 0.75);
        }
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_concurrent_misses_compute_once() {
        let cache = Arc::new(MemoCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = LatticeKey::new(42, 42, NoiseChannel::Elevation3);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                std::thread::spawn(move || {
                    cache.get_or_insert_with(key, || {
                        calls.fetch_add(1, Ordering::Relaxed);
                        0.5 + i as f64 * 1e-3
                    })
                })
            })
            .collect();

        let values: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(calls.load(Ordering::Relaxed), 1, "Key computed more than once");
        assert!(
            values.iter().all(|v| v.to_bits() == values[0].to_bits()),
            "All threads must observe the same stored value"
        );
    }
}
