//! Map visualization: RGBA images of generated regions with an optional
//! hotspot overlay.
//!
//! These produce pixels only; encoding to a file format is left to the caller.

mod hotspot;
mod image;
mod renderers;

pub use self::image::MapImage;
pub use hotspot::{Highlight, HotspotOverlay, HotspotParseError, parse_hotspots};
pub use renderers::{
    HIGHLIGHT_COLOR, MAX_IMAGE_SIDE, RenderError, highlight_blend, render_region,
};
