//! Render configuration and the background → Voronoi → markers → overlays
//! pipeline.

use rand::Rng;

use crate::{
    draw_line, draw_line_aa, fill_circle, fill_rect, stroke_rect, Canvas, Color, DistanceMetric,
    Point, Rect, Result, SeedSet, VoronoiGenerator, VoronoiStats,
};

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
pub const DEFAULT_SEED_COUNT: usize = 200;
pub const DEFAULT_BACKGROUND: Color = Color::from_packed(0xFF50_5050);
pub const DEFAULT_MARKER_COLOR: Color = Color::from_packed(0xFF00_0000);
pub const DEFAULT_MARKER_RADIUS: i32 = 2;

/// A primitive drawn on top of the diagram
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Line {
        from: Point,
        to: Point,
        color: Color,
        antialiased: bool,
    },
    Rect {
        rect: Rect,
        color: Color,
        filled: bool,
    },
    Circle {
        center: Point,
        radius: i32,
        color: Color,
    },
}

impl Overlay {
    pub fn draw(&self, canvas: &mut Canvas) {
        match *self {
            Overlay::Line { from, to, color, antialiased: true } => {
                draw_line_aa(canvas, from, to, color)
            }
            Overlay::Line { from, to, color, antialiased: false } => {
                draw_line(canvas, from, to, color)
            }
            Overlay::Rect { rect, color, filled: true } => fill_rect(canvas, rect, color),
            Overlay::Rect { rect, color, filled: false } => stroke_rect(canvas, rect, color),
            Overlay::Circle { center, radius, color } => fill_circle(canvas, center, radius, color),
        }
    }
}

/// Everything needed to produce one image
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub metric: DistanceMetric,
    pub seed_count: usize,
    pub background: Color,
    pub seed_marker_color: Color,
    /// Disc radius of each seed marker; negative disables markers
    pub seed_marker_radius: i32,
    /// Bound on `width * height * seed_count`
    pub work_limit: Option<u64>,
    pub overlays: Vec<Overlay>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            metric: DistanceMetric::default(),
            seed_count: DEFAULT_SEED_COUNT,
            background: DEFAULT_BACKGROUND,
            seed_marker_color: DEFAULT_MARKER_COLOR,
            seed_marker_radius: DEFAULT_MARKER_RADIUS,
            work_limit: None,
            overlays: Vec::new(),
        }
    }
}

/// Output of a render: the finished canvas plus what produced it
#[derive(Debug)]
pub struct Rendered {
    pub canvas: Canvas,
    pub seeds: SeedSet,
    pub stats: VoronoiStats,
}

/// Draw a filled disc at every seed position
pub fn draw_markers(canvas: &mut Canvas, seeds: &SeedSet, radius: i32, color: Color) {
    for seed in seeds {
        fill_circle(canvas, seed.pos, radius, color);
    }
}

/// Runs the full image pipeline for a [`RenderConfig`].
#[derive(Debug, Clone, Default)]
pub struct Painter {
    config: RenderConfig,
}

impl Painter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn generator(&self) -> VoronoiGenerator {
        let generator = VoronoiGenerator::new(self.config.metric);
        match self.config.work_limit {
            Some(limit) => generator.with_work_limit(limit),
            None => generator,
        }
    }

    /// Draw `seed_count` seeds from `rng` and render them.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Rendered> {
        self.render_with_progress(rng, |_| {})
    }

    pub fn render_with_progress<R, F>(&self, rng: &mut R, on_row: F) -> Result<Rendered>
    where
        R: Rng + ?Sized,
        F: Fn(u32) + Sync,
    {
        let c = &self.config;
        let seeds = SeedSet::random(rng, c.seed_count, c.width, c.height);
        self.render_seeds(seeds, on_row)
    }

    /// Render a pre-built seed set (its size overrides `seed_count`).
    pub fn render_seeds<F>(&self, seeds: SeedSet, on_row: F) -> Result<Rendered>
    where
        F: Fn(u32) + Sync,
    {
        let c = &self.config;
        let mut canvas = Canvas::new(c.width, c.height)?;
        canvas.fill(c.background);

        let stats = self.generator().paint_with_progress(&mut canvas, &seeds, on_row)?;

        if c.seed_marker_radius >= 0 {
            draw_markers(&mut canvas, &seeds, c.seed_marker_radius, c.seed_marker_color);
        }

        if !c.overlays.is_empty() {
            log::debug!("drawing {} overlays", c.overlays.len());
        }
        for overlay in &c.overlays {
            overlay.draw(&mut canvas);
        }

        Ok(Rendered { canvas, seeds, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PainterError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 64,
            height: 48,
            seed_count: 12,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_defaults_match_legacy_tool() {
        let c = RenderConfig::default();
        assert_eq!((c.width, c.height), (1920, 1080));
        assert_eq!(c.seed_count, 200);
        assert_eq!(c.background, Color::rgb(0x50, 0x50, 0x50));
        assert_eq!(c.seed_marker_color, Color::BLACK);
        assert_eq!(c.seed_marker_radius, 2);
        assert_eq!(c.metric, DistanceMetric::Euclidean);
    }

    #[test]
    fn test_markers_drawn_over_diagram() {
        let painter = Painter::new(small_config());
        let out = painter.render(&mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!(out.seeds.len(), 12);
        for seed in &out.seeds {
            assert_eq!(out.canvas.get(seed.pos.x, seed.pos.y), Color::BLACK);
        }
        assert_eq!(out.stats.cell_areas.iter().sum::<u64>(), 64 * 48);
    }

    #[test]
    fn test_same_rng_seed_same_image() {
        let painter = Painter::new(small_config());
        let a = painter.render(&mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = painter.render(&mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(a.canvas, b.canvas);
    }

    #[test]
    fn test_overlays_drawn_last_in_order() {
        let config = RenderConfig {
            seed_marker_radius: -1,
            overlays: vec![
                Overlay::Rect { rect: Rect::new(0, 0, 10, 10), color: Color::RED, filled: true },
                Overlay::Line {
                    from: Point::new(0, 5),
                    to: Point::new(20, 5),
                    color: Color::WHITE,
                    antialiased: false,
                },
                Overlay::Circle { center: Point::new(40, 30), radius: 3, color: Color::RED },
            ],
            ..small_config()
        };
        let seeds = SeedSet::from_pairs([(Point::new(1, 1), Color::rgb(1, 2, 3))]);
        let out = Painter::new(config).render_seeds(seeds, |_| {}).unwrap();
        assert_eq!(out.canvas.get(2, 2), Color::RED);
        assert_eq!(out.canvas.get(2, 5), Color::WHITE);
        assert_eq!(out.canvas.get(19, 5), Color::WHITE);
        assert_eq!(out.canvas.get(40, 33), Color::RED);
        assert_eq!(out.canvas.get(30, 30), Color::rgb(1, 2, 3));
        // Markers disabled: the seed pixel keeps its cell color under the rect
        assert_eq!(out.canvas.get(1, 1), Color::RED);
    }

    #[test]
    fn test_work_limit_propagates() {
        let config = RenderConfig { work_limit: Some(100), ..small_config() };
        let err = Painter::new(config)
            .render(&mut ChaCha8Rng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, PainterError::WorkLimitExceeded { .. }));
    }

    #[test]
    fn test_zero_seeds_is_an_error() {
        let config = RenderConfig { seed_count: 0, ..small_config() };
        let err = Painter::new(config)
            .render(&mut ChaCha8Rng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, PainterError::NoSeeds));
    }
}
