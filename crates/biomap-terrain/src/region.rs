//! Square region generation across a worker pool.
//!
//! Rows of the region are fanned out to worker threads over a channel; each
//! finished row is written back into its own slot of the grid, so completion
//! order does not matter.

use crossbeam_channel::bounded;

use crate::biome::{BiomeClassifier, BiomeLabel};
use crate::error::TerrainError;
use crate::session::SeedSession;

/// Per-label cell counts for a region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BiomeCounts([usize; BiomeLabel::ALL.len()]);

impl BiomeCounts {
    /// Number of cells with `label`.
    pub fn get(&self, label: BiomeLabel) -> usize {
        self.0[label.index()]
    }

    /// Total number of counted cells.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Labels that occur at least once, with their counts.
    pub fn present(&self) -> impl Iterator<Item = (BiomeLabel, usize)> + '_ {
        BiomeLabel::ALL
            .into_iter()
            .map(|label| (label, self.get(label)))
            .filter(|&(_, count)| count > 0)
    }

    fn add(&mut self, label: BiomeLabel) {
        self.0[label.index()] += 1;
    }
}

/// Labels for a `(2·range + 1)²` window around a center coordinate.
///
/// Row 0 is the northernmost row (`center.y + range`); column 0 is the
/// westernmost column (`center.x - range`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionGrid {
    center: (i64, i64),
    range: u32,
    side: usize,
    cells: Vec<BiomeLabel>,
}

impl RegionGrid {
    /// Width and height of the grid in cells.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Half-width of the window, excluding the center cell.
    pub fn range(&self) -> u32 {
        self.range
    }

    /// The center coordinate.
    pub fn center(&self) -> (i64, i64) {
        self.center
    }

    /// World coordinate of the cell at `(column, row)`.
    pub fn coordinate_of(&self, column: usize, row: usize) -> (i64, i64) {
        let range = i64::from(self.range);
        (
            self.center.0 - range + column as i64,
            self.center.1 + range - row as i64,
        )
    }

    /// Label at world coordinate `(x, y)`, or `None` outside the window.
    pub fn get(&self, x: i64, y: i64) -> Option<BiomeLabel> {
        let range = i64::from(self.range);
        let column = x.checked_sub(self.center.0)?.checked_add(range)?;
        let row = self.center.1.checked_add(range)?.checked_sub(y)?;
        let side = self.side as i64;
        if !(0..side).contains(&column) || !(0..side).contains(&row) {
            return None;
        }
        Some(self.cells[row as usize * self.side + column as usize])
    }

    /// One row of labels, west to east.
    ///
    /// # Panics
    ///
    /// Panics if `row >= side`.
    pub fn row(&self, row: usize) -> &[BiomeLabel] {
        &self.cells[row * self.side..(row + 1) * self.side]
    }

    /// All labels in row-major order.
    pub fn cells(&self) -> &[BiomeLabel] {
        &self.cells
    }

    /// Iterates `((x, y), label)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((i64, i64), BiomeLabel)> + '_ {
        self.cells.iter().enumerate().map(|(i, &label)| {
            (self.coordinate_of(i % self.side, i / self.side), label)
        })
    }

    /// Histogram of labels in the region.
    pub fn counts(&self) -> BiomeCounts {
        let mut counts = BiomeCounts::default();
        for &label in &self.cells {
            counts.add(label);
        }
        counts
    }
}

/// Largest half-width [`generate_region`] accepts: an 8193² window, about
/// 67 million cells.
pub const MAX_REGION_RANGE: u32 = 4096;

/// A sensible worker count based on CPU cores.
pub fn default_thread_count() -> usize {
    num_cpus::get().max(1)
}

/// Classifies every cell of the window `range` cells around `center`.
///
/// # Errors
///
/// Returns [`TerrainError::NotInitialized`] if the session has no seed,
/// [`TerrainError::RegionTooLarge`] if `range` exceeds [`MAX_REGION_RANGE`],
/// and [`TerrainError::InvalidCoordinate`] if the window leaves the `i64`
/// range.
pub fn generate_region(
    session: &SeedSession,
    center: (i64, i64),
    range: u32,
    threads: usize,
) -> Result<RegionGrid, TerrainError> {
    let classifier = BiomeClassifier::new(session.field()?);

    let span = i64::from(range);
    let in_bounds = center.0.checked_sub(span).is_some()
        && center.0.checked_add(span).is_some()
        && center.1.checked_sub(span).is_some()
        && center.1.checked_add(span).is_some();
    if !in_bounds {
        return Err(TerrainError::InvalidCoordinate {
            x: center.0 as f64,
            y: center.1 as f64,
        });
    }

    let too_large = TerrainError::RegionTooLarge {
        range,
        max: MAX_REGION_RANGE,
    };
    if range > MAX_REGION_RANGE {
        return Err(too_large);
    }
    let side = (range as usize)
        .checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .ok_or_else(|| too_large.clone())?;
    let cell_count = side.checked_mul(side).ok_or(too_large)?;
    let threads = threads.clamp(1, side);
    let start = std::time::Instant::now();

    let (row_sender, row_receiver) = bounded::<usize>(side);
    let (result_sender, result_receiver) = bounded::<(usize, Vec<BiomeLabel>)>(side);
    for row in 0..side {
        // Capacity is `side`, so this never blocks.
        let _ = row_sender.send(row);
    }
    drop(row_sender);

    let mut cells = vec![BiomeLabel::Origin; cell_count];

    std::thread::scope(|scope| {
        for _ in 0..threads {
            let receiver = row_receiver.clone();
            let sender = result_sender.clone();
            scope.spawn(move || {
                while let Ok(row) = receiver.recv() {
                    let y = center.1 + span - row as i64;
                    let labels = (0..side)
                        .map(|column| classifier.classify(center.0 - span + column as i64, y))
                        .collect();
                    if sender.send((row, labels)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(result_sender);

        for (row, labels) in result_receiver.iter() {
            cells[row * side..(row + 1) * side].copy_from_slice(&labels);
        }
    });

    tracing::debug!(
        range,
        threads,
        cells = cell_count,
        cached_samples = session.cached_samples(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "region generated"
    );

    Ok(RegionGrid {
        center,
        range,
        side,
        cells,
    })
}
