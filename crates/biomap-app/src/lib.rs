//! The `biomap` application: configuration, seed rotation, map rendering and
//! PNG output around the `biomap-terrain` core.

pub mod debug_viz;
pub mod error;
pub mod map;
pub mod output;
pub mod platform;

pub use error::AppError;
pub use map::{MapRun, parse_query, resolve_seed, run};
pub use platform::PlatformDirs;
