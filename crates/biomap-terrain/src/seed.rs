//! Deterministic seeded hashing utilities.
//!
//! Provides the lattice hash that turns a `(seed, x, y, salt)` tuple into a
//! reproducible float, plus deterministic math via `libm` so interpolation is
//! bit-exact across platforms.

use sha2::{Digest, Sha256};

/// Number of digest bytes read as the lattice value.
const PREFIX_BYTES: usize = 4;

/// `2^32`, the exclusive upper bound of a 4-byte prefix.
const PREFIX_RANGE: f64 = 4_294_967_296.0;

// ---------------------------------------------------------------------------
// Lattice hashing
// ---------------------------------------------------------------------------

/// Render the canonical hash key `seed:x:y:salt`.
///
/// `x` and `y` are decimal integers and salts never contain `:`, so the key
/// splits uniquely from the right even when the seed itself contains colons
/// (seeds are usually `server:YYYY-MM-DD`).
pub fn lattice_key(seed: &str, x: i64, y: i64, salt: &str) -> String {
    debug_assert!(!salt.contains(':'), "salt must not contain ':'");
    format!("{seed}:{x}:{y}:{salt}")
}

/// Hash one lattice point into a float in `[0, 1)`.
///
/// SHA-256 over [`lattice_key`]; the first four digest bytes are read as a
/// big-endian `u32` and divided by `2^32`. Dividing by `2^32 - 1` instead would
/// reach 1.0; the two scalings differ by about `2^-32` relative, which can flip
/// the label of a cell sitting exactly on a threshold.
pub fn hashed_float(seed: &str, x: i64, y: i64, salt: &str) -> f64 {
    let digest = Sha256::digest(lattice_key(seed, x, y, salt).as_bytes());
    let mut prefix = [0_u8; PREFIX_BYTES];
    prefix.copy_from_slice(&digest[..PREFIX_BYTES]);
    f64::from(u32::from_be_bytes(prefix)) / PREFIX_RANGE
}

// ---------------------------------------------------------------------------
// Deterministic math (libm)
// ---------------------------------------------------------------------------

/// Deterministic cosine using libm (not platform libc).
#[inline]
pub fn det_cos(x: f64) -> f64 {
    libm::cos(x)
}

/// Deterministic floor using libm.
#[inline]
pub fn det_floor(x: f64) -> f64 {
    libm::floor(x)
}
