//! Terrain error types.

/// Errors returned by a [`SeedSession`](crate::SeedSession).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// A query was issued before any seed was set with `initialize`.
    #[error("seed session is not initialized")]
    NotInitialized,

    /// A coordinate was non-finite or outside the representable range.
    #[error("invalid coordinate ({x}, {y})")]
    InvalidCoordinate {
        /// Requested x.
        x: f64,
        /// Requested y.
        y: f64,
    },

    /// A region window has more cells than one grid may hold.
    #[error("region range {range} exceeds the maximum of {max}")]
    RegionTooLarge {
        /// Requested half-width.
        range: u32,
        /// Largest accepted half-width.
        max: u32,
    },
}
