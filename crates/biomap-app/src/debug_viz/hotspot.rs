//! Hotspot overlay: highlight rings drawn around points of interest.

use hashbrown::HashMap;

/// Errors from parsing a hotspot list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotspotParseError {
    /// A segment was not of the form `x,y`.
    #[error("malformed hotspot `{0}`, expected `x,y`")]
    Malformed(String),

    /// A coordinate was not an integer.
    #[error("invalid hotspot coordinate `{0}`")]
    InvalidNumber(String),
}

/// Parses `x,y;x,y;...` into coordinates. Empty segments are skipped.
///
/// # Errors
///
/// Returns [`HotspotParseError`] for a segment that is not two integers.
pub fn parse_hotspots(input: &str) -> Result<Vec<(i64, i64)>, HotspotParseError> {
    input
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (x, y) = segment
                .split_once(',')
                .ok_or_else(|| HotspotParseError::Malformed(segment.to_string()))?;
            let parse = |s: &str| {
                s.trim()
                    .parse::<i64>()
                    .map_err(|_| HotspotParseError::InvalidNumber(s.trim().to_string()))
            };
            Ok((parse(x)?, parse(y)?))
        })
        .collect()
}

/// Highlight level of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Chebyshev distance 2 from a hotspot.
    Ring2,
    /// Chebyshev distance 1 from a hotspot.
    Ring1,
    /// The hotspot cell itself.
    Center,
}

/// Highlighted cells for a set of hotspots.
///
/// Hotspots are applied in order, each writing its outer ring, then its inner
/// ring, then its center; a later hotspot overwrites cells an earlier one set.
#[derive(Clone, Debug, Default)]
pub struct HotspotOverlay {
    cells: HashMap<(i64, i64), Highlight>,
}

impl HotspotOverlay {
    /// Builds the overlay for `hotspots`.
    pub fn new(hotspots: &[(i64, i64)]) -> Self {
        let mut cells = HashMap::new();
        for &(cx, cy) in hotspots {
            for dy in -2..=2_i64 {
                for dx in -2..=2_i64 {
                    if dx.abs().max(dy.abs()) == 2 {
                        cells.insert((cx + dx, cy + dy), Highlight::Ring2);
                    }
                }
            }
            for dy in -1..=1_i64 {
                for dx in -1..=1_i64 {
                    if dx != 0 || dy != 0 {
                        cells.insert((cx + dx, cy + dy), Highlight::Ring1);
                    }
                }
            }
            cells.insert((cx, cy), Highlight::Center);
        }
        Self { cells }
    }

    /// Highlight at `(x, y)`, if any.
    pub fn get(&self, x: i64, y: i64) -> Option<Highlight> {
        self.cells.get(&(x, y)).copied()
    }

    /// Number of highlighted cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
