//! One generator run: build the seed, classify the window, render and save it.

use std::path::PathBuf;

use biomap_config::{Config, SeedConfig};
use biomap_terrain::{
    BiomeLabel, NoiseParams, RegionGrid, SeedSession, WeeklySeed, default_thread_count,
    generate_region, weekly_key,
};
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

use crate::debug_viz::{HotspotOverlay, parse_hotspots, render_region};
use crate::error::AppError;
use crate::output::write_png;

/// Result of a completed run.
#[derive(Debug)]
pub struct MapRun {
    /// The seed the map was generated with.
    pub seed: WeeklySeed,
    /// Classified window.
    pub grid: RegionGrid,
    /// Single-coordinate answer, if one was asked for.
    pub query: Option<((i64, i64), BiomeLabel)>,
    /// Where the PNG was written.
    pub output: PathBuf,
}

/// Seed for this run: the configured week if set, otherwise the week of `now`.
pub fn resolve_seed(config: &SeedConfig, now: DateTime<Utc>) -> Result<WeeklySeed, AppError> {
    let week = match config.week.as_deref() {
        Some(week) => {
            let date = NaiveDate::parse_from_str(week.trim(), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidWeek(week.to_string()))?;
            if date.weekday() != Weekday::Mon {
                tracing::warn!(%date, "week key is not a Monday");
            }
            date.format("%Y-%m-%d").to_string()
        }
        None => weekly_key(now, config.rotation_offset_hours),
    };
    Ok(WeeklySeed {
        server_id: config.server_id.clone(),
        week,
    })
}

/// Parses an `x,y` coordinate pair.
pub fn parse_query(input: &str) -> Result<(i64, i64), AppError> {
    let invalid = || AppError::InvalidQuery(input.to_string());
    let (x, y) = input.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok((x, y))
}

/// Runs the generator for `config`, writing the map image to `config.map.output`.
pub fn run(config: &Config, query: Option<&str>, now: DateTime<Utc>) -> Result<MapRun, AppError> {
    let seed = resolve_seed(&config.seed, now)?;
    let query = query.map(parse_query).transpose()?;
    let hotspots = parse_hotspots(&config.map.hotspots)?;

    let mut session = SeedSession::with_params(NoiseParams {
        grid_size: config.noise.grid_size,
        humidity_grid_size: config.noise.humidity_grid_size,
    });
    session.initialize(seed.seed());

    let query = match query {
        Some((x, y)) => Some(((x, y), session.get_biome(x, y)?)),
        None => None,
    };

    let threads = match config.map.threads {
        0 => default_thread_count(),
        n => n,
    };
    let center = (config.map.center_x, config.map.center_y);
    let grid = generate_region(&session, center, config.map.range, threads)?;

    for (label, count) in grid.counts().present() {
        tracing::info!(biome = %label, count, "biome coverage");
    }

    let overlay = (!hotspots.is_empty()).then(|| HotspotOverlay::new(&hotspots));
    let image = render_region(&grid, config.map.cell_size, overlay.as_ref())?;
    write_png(&image, &config.map.output)?;
    tracing::info!(
        path = %config.map.output.display(),
        width = image.width,
        height = image.height,
        "map written"
    );

    Ok(MapRun {
        seed,
        grid,
        query,
        output: config.map.output.clone(),
    })
}
