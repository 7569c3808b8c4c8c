//! YAML render files.
//!
//! ```yaml
//! width: 800
//! height: 600
//! metric: manhattan
//! seeds: 50
//! seed: 7
//! background: "#505050"
//! marker_color: "0xFF000000"
//! marker_radius: 2
//! overlays:
//!   - shape: line
//!     from: [10, 10]
//!     to: [790, 400]
//!     color: "#ff0000"
//!     aa: true
//!   - shape: rect
//!     x: 20
//!     y: 20
//!     w: 100
//!     h: 50
//!     filled: false
//!   - shape: circle
//!     center: [400, 300]
//!     radius: 40
//! ```

use std::path::Path;

use anyhow::Context;
use painter_core::{Color, DistanceMetric, Overlay, Point, Rect};
use serde::Deserialize;

/// Overlay color when a shape does not name one
pub const DEFAULT_OVERLAY_COLOR: Color = Color::RED;

/// Top-level render file; every field is optional and CLI flags win
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSpec {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub seeds: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub marker_color: Option<String>,
    #[serde(default)]
    pub marker_radius: Option<i32>,
    #[serde(default)]
    pub work_limit: Option<u64>,
    #[serde(default)]
    pub overlays: Vec<OverlaySpec>,
}

fn default_filled() -> bool {
    true
}

/// One overlay shape in the render file
#[derive(Debug, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum OverlaySpec {
    Line {
        from: [i32; 2],
        to: [i32; 2],
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        aa: bool,
    },
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        #[serde(default)]
        color: Option<String>,
        #[serde(default = "default_filled")]
        filled: bool,
    },
    Circle {
        center: [i32; 2],
        radius: i32,
        #[serde(default)]
        color: Option<String>,
    },
}

pub fn parse_color(value: Option<&str>, fallback: Color) -> anyhow::Result<Color> {
    match value {
        Some(s) => s.parse().with_context(|| format!("invalid color '{}'", s)),
        None => Ok(fallback),
    }
}

impl OverlaySpec {
    pub fn to_overlay(&self) -> anyhow::Result<Overlay> {
        Ok(match self {
            OverlaySpec::Line { from, to, color, aa } => Overlay::Line {
                from: Point::new(from[0], from[1]),
                to: Point::new(to[0], to[1]),
                color: parse_color(color.as_deref(), DEFAULT_OVERLAY_COLOR)?,
                antialiased: *aa,
            },
            OverlaySpec::Rect { x, y, w, h, color, filled } => Overlay::Rect {
                rect: Rect::new(*x, *y, *w, *h),
                color: parse_color(color.as_deref(), DEFAULT_OVERLAY_COLOR)?,
                filled: *filled,
            },
            OverlaySpec::Circle { center, radius, color } => Overlay::Circle {
                center: Point::new(center[0], center[1]),
                radius: *radius,
                color: parse_color(color.as_deref(), DEFAULT_OVERLAY_COLOR)?,
            },
        })
    }
}

impl RenderSpec {
    pub fn metric(&self) -> anyhow::Result<Option<DistanceMetric>> {
        self.metric
            .as_deref()
            .map(|m| m.parse::<DistanceMetric>())
            .transpose()
            .map_err(|e| anyhow::anyhow!(e))
    }

    pub fn overlays(&self) -> anyhow::Result<Vec<Overlay>> {
        self.overlays.iter().map(OverlaySpec::to_overlay).collect()
    }
}

pub fn load_spec(path: &Path) -> anyhow::Result<RenderSpec> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read spec file: {:?}", path))?;
    parse_spec(&contents).with_context(|| format!("failed to parse spec file: {:?}", path))
}

pub fn parse_spec(contents: &str) -> anyhow::Result<RenderSpec> {
    Ok(serde_yaml::from_str(contents)?)
}

/// Parse an inline line overlay: `x0,y0,x1,y1` with an optional trailing `aa`
pub fn parse_line(spec: &str, color: Color) -> anyhow::Result<Overlay> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let (coords, antialiased) = match parts.as_slice() {
        [coords @ .., "aa"] => (coords, true),
        coords => (coords, false),
    };
    let [x0, y0, x1, y1] = coords else {
        anyhow::bail!("invalid line '{}': expected x0,y0,x1,y1[,aa]", spec);
    };
    let num = |s: &str| -> anyhow::Result<i32> {
        s.parse().with_context(|| format!("invalid coordinate '{}' in line '{}'", s, spec))
    };
    Ok(Overlay::Line {
        from: Point::new(num(*x0)?, num(*y0)?),
        to: Point::new(num(*x1)?, num(*y1)?),
        color,
        antialiased,
    })
}
