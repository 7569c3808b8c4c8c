//! Brute-force nearest-seed Voronoi coloring.
//!
//! Every pixel is compared against every seed, O(width * height * seeds).
//! Rows are independent, so with the `parallel` feature they are split across
//! Rayon workers; the output is identical to the sequential scan.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{Canvas, Color, PainterError, Point, Result, Seed, SeedSet};

/// Distance used to pick the nearest seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceMetric {
    /// Squared Euclidean distance `dx² + dy²`
    #[default]
    Euclidean,
    /// Taxicab distance `|dx| + |dy|`
    Manhattan,
}

impl DistanceMetric {
    #[inline]
    pub fn distance(self, a: &Point, b: &Point) -> i64 {
        match self {
            DistanceMetric::Euclidean => a.dist_sq(b),
            DistanceMetric::Manhattan => a.manhattan(b),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::Euclidean => write!(f, "euclidean"),
            DistanceMetric::Manhattan => write!(f, "manhattan"),
        }
    }
}

/// Accepts the metric names and the legacy numeric codes (0 = Euclidean,
/// 1 = Manhattan).
impl FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" | "euclidian" | "0" => Ok(DistanceMetric::Euclidean),
            "manhattan" | "taxicab" | "1" => Ok(DistanceMetric::Manhattan),
            other => Err(format!(
                "unknown distance metric '{}' (expected euclidean or manhattan)",
                other
            )),
        }
    }
}

/// Per-seed summary of a Voronoi pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoronoiStats {
    /// Pixel count of each seed's cell, in seed order
    pub cell_areas: Vec<u64>,
    pub width: u32,
    pub height: u32,
}

impl VoronoiStats {
    /// Seeds whose cell received no pixel (shadowed by an earlier duplicate)
    pub fn empty_cells(&self) -> usize {
        self.cell_areas.iter().filter(|&&a| a == 0).count()
    }
}

/// Paints every canvas pixel with the color of its nearest seed.
#[derive(Debug, Clone)]
pub struct VoronoiGenerator {
    pub metric: DistanceMetric,
    /// Upper bound on `width * height * seeds`; `None` = unbounded
    pub work_limit: Option<u64>,
    /// Split rows across Rayon workers (only with the `parallel` feature)
    pub parallel: bool,
}

impl VoronoiGenerator {
    pub fn new(metric: DistanceMetric) -> Self {
        Self { metric, work_limit: None, parallel: true }
    }

    pub fn with_work_limit(mut self, limit: u64) -> Self {
        self.work_limit = Some(limit);
        self
    }

    /// Force the single-threaded row scan
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Index of the nearest seed to `p`. The first seed wins ties.
    ///
    /// `seeds` must not be empty.
    #[inline]
    pub fn nearest(&self, seeds: &[Seed], p: Point) -> usize {
        let mut nearest = 0;
        let mut min_dist = i64::MAX;
        for (i, seed) in seeds.iter().enumerate() {
            let dist = self.metric.distance(&p, &seed.pos);
            if dist < min_dist {
                min_dist = dist;
                nearest = i;
            }
        }
        nearest
    }

    /// Work units (`width * height * seeds`) a pass over `canvas` would take
    pub fn work(canvas: &Canvas, seeds: &SeedSet) -> u64 {
        u64::from(canvas.width())
            .saturating_mul(u64::from(canvas.height()))
            .saturating_mul(seeds.len() as u64)
    }

    /// Overwrite every pixel of `canvas` with its nearest seed's color.
    pub fn paint(&self, canvas: &mut Canvas, seeds: &SeedSet) -> Result<VoronoiStats> {
        self.paint_with_progress(canvas, seeds, |_| {})
    }

    /// Like [`paint`](Self::paint), calling `on_row(y)` as each row finishes.
    /// Rows may complete out of order when running in parallel.
    pub fn paint_with_progress<F>(
        &self,
        canvas: &mut Canvas,
        seeds: &SeedSet,
        on_row: F,
    ) -> Result<VoronoiStats>
    where
        F: Fn(u32) + Sync,
    {
        if seeds.is_empty() {
            return Err(PainterError::NoSeeds);
        }
        let work = Self::work(canvas, seeds);
        if let Some(limit) = self.work_limit {
            if work > limit {
                return Err(PainterError::WorkLimitExceeded { work, limit });
            }
        }

        let (width, height) = (canvas.width(), canvas.height());
        log::debug!(
            "voronoi: {}x{} canvas, {} seeds, {} metric, {} work units",
            width,
            height,
            seeds.len(),
            self.metric,
            work
        );

        let seeds = seeds.seeds();
        let cell_areas = if canvas.pixel_count() == 0 {
            vec![0; seeds.len()]
        } else {
            self.scan_rows(canvas, seeds, &on_row)
        };

        Ok(VoronoiStats { cell_areas, width, height })
    }

    /// Classify one row in place, counting pixels per cell into `areas`
    fn paint_row(&self, seeds: &[Seed], y: usize, row: &mut [Color], areas: &mut [u64]) {
        let y = y as i32;
        for (x, pixel) in row.iter_mut().enumerate() {
            let nearest = self.nearest(seeds, Point::new(x as i32, y));
            *pixel = seeds[nearest].color;
            areas[nearest] += 1;
        }
    }

    #[cfg(feature = "parallel")]
    fn scan_rows<F>(&self, canvas: &mut Canvas, seeds: &[Seed], on_row: &F) -> Vec<u64>
    where
        F: Fn(u32) + Sync,
    {
        if !self.parallel {
            return self.scan_rows_sequential(canvas, seeds, on_row);
        }

        let width = canvas.width() as usize;
        let num_seeds = seeds.len();
        canvas
            .pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .fold(
                || vec![0u64; num_seeds],
                |mut areas, (y, row)| {
                    self.paint_row(seeds, y, row, &mut areas);
                    on_row(y as u32);
                    areas
                },
            )
            .reduce(
                || vec![0u64; num_seeds],
                |mut a, b| {
                    for (total, n) in a.iter_mut().zip(b) {
                        *total += n;
                    }
                    a
                },
            )
    }

    #[cfg(not(feature = "parallel"))]
    fn scan_rows<F>(&self, canvas: &mut Canvas, seeds: &[Seed], on_row: &F) -> Vec<u64>
    where
        F: Fn(u32) + Sync,
    {
        self.scan_rows_sequential(canvas, seeds, on_row)
    }

    fn scan_rows_sequential<F>(&self, canvas: &mut Canvas, seeds: &[Seed], on_row: &F) -> Vec<u64>
    where
        F: Fn(u32) + Sync,
    {
        let width = canvas.width() as usize;
        let mut areas = vec![0u64; seeds.len()];
        for (y, row) in canvas.pixels_mut().chunks_mut(width).enumerate() {
            self.paint_row(seeds, y, row, &mut areas);
            on_row(y as u32);
        }
        areas
    }
}

impl Default for VoronoiGenerator {
    fn default() -> Self {
        Self::new(DistanceMetric::default())
    }
}
