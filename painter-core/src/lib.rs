//! Procedural raster painting core.
//!
//! An owned RGBA [`Canvas`], clipping helpers, Bresenham and Wu line
//! rasterizers, rectangle/disc fills and a brute-force Voronoi colorer that
//! paints every pixel with the color of its nearest seed.

mod canvas;
mod clip;
mod color;
mod geometry;
mod line;
mod painter;
mod seed;
mod shape;
mod voronoi;

pub use canvas::Canvas;
pub use clip::{clip_line, clip_line_endpoint, clip_rect};
pub use color::Color;
pub use geometry::{order_endpoints, Point, Rect};
pub use line::{coverage, draw_line, draw_line_aa};
pub use painter::{
    draw_markers, Overlay, Painter, RenderConfig, Rendered, DEFAULT_BACKGROUND, DEFAULT_HEIGHT,
    DEFAULT_MARKER_COLOR, DEFAULT_MARKER_RADIUS, DEFAULT_SEED_COUNT, DEFAULT_WIDTH,
};
pub use seed::{Seed, SeedSet};
pub use shape::{fill_circle, fill_rect, stroke_rect};
pub use voronoi::{DistanceMetric, VoronoiGenerator, VoronoiStats};

/// Error type for painter operations
#[derive(Debug, thiserror::Error)]
pub enum PainterError {
    #[error("Cannot allocate a {width}x{height} canvas")]
    Allocation { width: u32, height: u32 },

    #[error("No seeds provided")]
    NoSeeds,

    #[error("Voronoi pass needs {work} distance evaluations, limit is {limit}")]
    WorkLimitExceeded { work: u64, limit: u64 },

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, PainterError>;
