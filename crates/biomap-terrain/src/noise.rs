//! Seeded 2D value noise.
//!
//! Hashes integer lattice points through the session's [`MemoCache`] and blends
//! the four corners of each lattice cell with cosine easing, which keeps the
//! field's derivative continuous across cell boundaries.

use std::f64::consts::PI;
use std::fmt;

use crate::cache::{LatticeKey, MemoCache};
use crate::seed::{det_cos, det_floor, hashed_float};

/// Default lattice spacing for elevation, temperature and river channels.
pub const DEFAULT_GRID_SIZE: f64 = 6.0;

/// Default lattice spacing for the humidity channel.
pub const DEFAULT_HUMIDITY_GRID_SIZE: f64 = 15.0;

/// A logical noise channel. Its salt keeps channels independent even though
/// they share one hash function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseChannel {
    /// Coarse elevation octave.
    Elevation1,
    /// Middle elevation octave, sampled at twice the frequency.
    Elevation2,
    /// Fine elevation octave, sampled at four times the frequency.
    Elevation3,
    /// Temperature before the latitude gradient is applied.
    Temperature,
    /// Humidity, sampled on the coarser humidity lattice.
    Humidity,
    /// River field stretched along x.
    RiverVertical,
    /// River field stretched along y.
    RiverHorizontal,
}

impl NoiseChannel {
    /// Every channel, in classification order.
    pub const ALL: [NoiseChannel; 7] = [
        NoiseChannel::Elevation1,
        NoiseChannel::Elevation2,
        NoiseChannel::Elevation3,
        NoiseChannel::Temperature,
        NoiseChannel::Humidity,
        NoiseChannel::RiverVertical,
        NoiseChannel::RiverHorizontal,
    ];

    /// The salt appended to the lattice hash key.
    pub fn salt(self) -> &'static str {
        match self {
            NoiseChannel::Elevation1 => "elevation1",
            NoiseChannel::Elevation2 => "elevation2",
            NoiseChannel::Elevation3 => "elevation3",
            NoiseChannel::Temperature => "temp",
            NoiseChannel::Humidity => "humidity",
            NoiseChannel::RiverVertical => "river_v",
            NoiseChannel::RiverHorizontal => "river_h",
        }
    }

}

impl fmt::Display for NoiseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.salt())
    }
}

/// Lattice spacing used by the noise field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParams {
    /// Lattice spacing for every channel except humidity.
    pub grid_size: f64,
    /// Lattice spacing for humidity. Larger values give broader wet/dry regions.
    pub humidity_grid_size: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            humidity_grid_size: DEFAULT_HUMIDITY_GRID_SIZE,
        }
    }
}

impl NoiseParams {
    /// Replaces non-finite or non-positive spacings with the defaults.
    pub fn sanitized(self) -> Self {
        let fix = |value: f64, fallback: f64, name: &str| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                tracing::warn!(value, fallback, "invalid {name}, using default");
                fallback
            }
        };
        Self {
            grid_size: fix(self.grid_size, DEFAULT_GRID_SIZE, "grid_size"),
            humidity_grid_size: fix(
                self.humidity_grid_size,
                DEFAULT_HUMIDITY_GRID_SIZE,
                "humidity_grid_size",
            ),
        }
    }

    /// The lattice spacing a channel samples on by default.
    pub fn grid_for(&self, channel: NoiseChannel) -> f64 {
        match channel {
            NoiseChannel::Humidity => self.humidity_grid_size,
            _ => self.grid_size,
        }
    }
}

/// Cosine ease: `(1 - cos(t·π)) / 2`.
#[inline]
pub fn ease(t: f64) -> f64 {
    (1.0 - det_cos(t * PI)) * 0.5
}

/// Blends `a` toward `b` by the eased weight of `t`.
#[inline]
pub fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    let f = ease(t);
    a * (1.0 - f) + b * f
}

/// A view of the value-noise field for one seed, backed by a session cache.
#[derive(Clone, Copy, Debug)]
pub struct ValueNoiseField<'a> {
    seed: &'a str,
    cache: &'a MemoCache,
    params: NoiseParams,
}

impl<'a> ValueNoiseField<'a> {
    /// Creates a field over `seed` that memoizes lattice samples in `cache`.
    ///
    /// `cache` must only ever hold samples for `seed`.
    pub fn new(seed: &'a str, cache: &'a MemoCache, params: NoiseParams) -> Self {
        Self {
            seed,
            cache,
            params,
        }
    }

    /// The seed this field hashes with.
    pub fn seed(&self) -> &'a str {
        self.seed
    }

    /// The lattice spacing in use.
    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// The hashed value at an integer lattice point, via the cache.
    pub fn lattice(&self, ix: i64, iy: i64, channel: NoiseChannel) -> f64 {
        self.cache
            .get_or_insert_with(LatticeKey::new(ix, iy, channel), || {
                hashed_float(self.seed, ix, iy, channel.salt())
            })
    }

    /// Samples `channel` at `(x, y)` on the channel's default lattice.
    pub fn sample(&self, x: f64, y: f64, channel: NoiseChannel) -> f64 {
        self.sample_with_grid(x, y, channel, self.params.grid_for(channel))
    }

    /// Samples `channel` at `(x, y)` on a lattice of spacing `grid_size`.
    ///
    /// Returns a value in `[0, 1)`. `x` and `y` must be finite.
    pub fn sample_with_grid(&self, x: f64, y: f64, channel: NoiseChannel, grid_size: f64) -> f64 {
        let gx = x / grid_size;
        let gy = y / grid_size;
        let cell_x = det_floor(gx);
        let cell_y = det_floor(gy);
        let fx = gx - cell_x;
        let fy = gy - cell_y;
        // `as` saturates far outside the i64 range; the +1 neighbour wraps so
        // every finite point still has four corners.
        let ix = cell_x as i64;
        let iy = cell_y as i64;
        let jx = ix.wrapping_add(1);
        let jy = iy.wrapping_add(1);

        let v1 = self.lattice(ix, iy, channel);
        let v2 = self.lattice(jx, iy, channel);
        let v3 = self.lattice(ix, jy, channel);
        let v4 = self.lattice(jx, jy, channel);

        let top = interpolate(v1, v2, fx);
        let bottom = interpolate(v3, v4, fx);
        interpolate(top, bottom, fy)
    }
}
