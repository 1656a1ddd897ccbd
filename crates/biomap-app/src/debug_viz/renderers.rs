//! Region renderer: one solid block per cell in the cell's biome color.

use super::hotspot::{Highlight, HotspotOverlay};
use super::image::MapImage;
use biomap_terrain::RegionGrid;

/// Largest image side [`render_region`] produces, in pixels.
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// A rendered image would exceed [`MAX_IMAGE_SIDE`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{side} cells at {cell_size} px per cell exceed the {MAX_IMAGE_SIDE} px image limit")]
pub struct RenderError {
    /// Cells per side of the grid.
    pub side: usize,
    /// Requested pixels per cell.
    pub cell_size: u32,
}

/// Color that highlighted cells are blended toward.
pub const HIGHLIGHT_COLOR: (u8, u8, u8) = (255, 215, 0);

/// Blends `rgb` toward [`HIGHLIGHT_COLOR`]; the center is strongest.
pub fn highlight_blend(rgb: (u8, u8, u8), highlight: Highlight) -> (u8, u8, u8) {
    let t = match highlight {
        Highlight::Center => 0.75,
        Highlight::Ring1 => 0.5,
        Highlight::Ring2 => 0.3,
    };
    let mix = |from: u8, to: u8| (from as f64 * (1.0 - t) + to as f64 * t).round() as u8;
    (
        mix(rgb.0, HIGHLIGHT_COLOR.0),
        mix(rgb.1, HIGHLIGHT_COLOR.1),
        mix(rgb.2, HIGHLIGHT_COLOR.2),
    )
}

/// Render a region with `cell_size` pixels per cell (minimum 1).
///
/// Row 0 of the grid (north) is the top of the image.
///
/// # Errors
///
/// Returns [`RenderError`] if the image side would exceed [`MAX_IMAGE_SIDE`].
pub fn render_region(
    grid: &RegionGrid,
    cell_size: u32,
    overlay: Option<&HotspotOverlay>,
) -> Result<MapImage, RenderError> {
    let cell_size = cell_size.max(1);
    let side = u32::try_from(grid.side())
        .ok()
        .and_then(|side| side.checked_mul(cell_size))
        .filter(|&px| px <= MAX_IMAGE_SIDE)
        .ok_or(RenderError {
            side: grid.side(),
            cell_size,
        })?;
    let mut image = MapImage::new(side, side);

    for row in 0..grid.side() {
        for (column, &label) in grid.row(row).iter().enumerate() {
            let mut rgb = label.color();
            if let Some(overlay) = overlay {
                let (x, y) = grid.coordinate_of(column, row);
                if let Some(highlight) = overlay.get(x, y) {
                    rgb = highlight_blend(rgb, highlight);
                }
            }
            image.fill_block(
                column as u32 * cell_size,
                row as u32 * cell_size,
                cell_size,
                rgb,
            );
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biomap_terrain::{BiomeLabel, SeedSession, generate_region};

    fn grid() -> RegionGrid {
        let mut session = SeedSession::new();
        session.initialize("render:2024-01-01");
        generate_region(&session, (0, 0), 3, 2).unwrap()
    }

    #[test]
    fn test_render_dimensions() {
        let image = render_region(&grid(), 4, None).unwrap();
        assert_eq!(image.dimensions(), (28, 28));
    }

    #[test]
    fn test_origin_cell_color() {
        let image = render_region(&grid(), 2, None).unwrap();
        // Origin is column 3, row 3.
        let (r, g, b) = BiomeLabel::Origin.color();
        assert_eq!(image.get_pixel(6, 6), (r, g, b, 255));
        assert_eq!(image.get_pixel(7, 7), (r, g, b, 255));
    }

    #[test]
    fn test_every_pixel_is_a_biome_color() {
        let grid = grid();
        let image = render_region(&grid, 1, None).unwrap();
        for row in 0..grid.side() {
            for (column, label) in grid.row(row).iter().enumerate() {
                let (r, g, b) = label.color();
                assert_eq!(image.get_pixel(column as u32, row as u32), (r, g, b, 255));
            }
        }
        assert_eq!(image.unique_color_count(), grid.counts().present().count());
    }

    #[test]
    fn test_overlay_tints_cells() {
        let grid = grid();
        let overlay = HotspotOverlay::new(&[(0, 0)]);
        let plain = render_region(&grid, 1, None).unwrap();
        let tinted = render_region(&grid, 1, Some(&overlay)).unwrap();
        let (r, g, b) = highlight_blend(BiomeLabel::Origin.color(), Highlight::Center);
        assert_eq!(tinted.get_pixel(3, 3), (r, g, b, 255));
        // Corner cell (-3, 3) is outside the rings.
        assert_eq!(tinted.get_pixel(0, 0), plain.get_pixel(0, 0));
    }

    #[test]
    fn test_zero_cell_size_is_one_pixel() {
        let image = render_region(&grid(), 0, None).unwrap();
        assert_eq!(image.dimensions(), (7, 7));
    }

    #[test]
    fn test_oversized_image_rejected() {
        let grid = grid();
        // 7 cells per side.
        let too_big = MAX_IMAGE_SIDE / 7 + 1;
        assert_eq!(
            render_region(&grid, too_big, None).unwrap_err(),
            RenderError {
                side: 7,
                cell_size: too_big,
            }
        );
        assert!(render_region(&grid, u32::MAX, None).is_err());
    }

    #[test]
    fn test_highlight_blend_strength() {
        let base = (0, 0, 0);
        let center = highlight_blend(base, Highlight::Center);
        let ring2 = highlight_blend(base, Highlight::Ring2);
        assert!(center.0 > ring2.0);
    }
}
