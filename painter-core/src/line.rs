//! Aliased (Bresenham) and anti-aliased (Wu) line rasterization.
//!
//! Both variants clip their endpoints first, pick the axis with the larger
//! delta as the major axis and walk it upward one pixel per step. The last
//! endpoint is not drawn: a line from `(0, 0)` to `(10, 0)` covers x = 0..9.

use crate::geometry::order_endpoints;
use crate::{clip_line, Canvas, Color, Point};

/// Which axis drives the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Major {
    X,
    Y,
}

fn major_axis(p0: Point, p1: Point) -> Major {
    let dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
    let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();
    if dx > dy {
        Major::X
    } else {
        Major::Y
    }
}

/// Walk a line in major/minor space. `plot` receives (major, minor).
fn bresenham(
    (major0, minor0): (i32, i32),
    (major1, minor1): (i32, i32),
    mut plot: impl FnMut(i32, i32),
) {
    let major_delta = i64::from(major1) - i64::from(major0);
    let minor_delta = (i64::from(minor1) - i64::from(minor0)).abs();
    let step = if minor0 < minor1 { 1 } else { -1 };

    let mut d = minor_delta;
    let mut minor = minor0;
    for major in major0..major1 {
        d += 2 * minor_delta;
        if d > 2 * major_delta {
            minor += step;
            d -= 2 * major_delta;
        }
        plot(major, minor);
    }
}

/// Draw an aliased line with integer-only error accumulation.
pub fn draw_line(canvas: &mut Canvas, p0: Point, p1: Point, color: Color) {
    let Some((p0, p1)) = clip_line(canvas, p0, p1) else {
        return;
    };

    match major_axis(p0, p1) {
        Major::X => {
            let (a, b) = order_endpoints(p0, p1, |p| p.x);
            bresenham((a.x, a.y), (b.x, b.y), |x, y| {
                canvas.plot(x, y, color);
            });
        }
        Major::Y => {
            let (a, b) = order_endpoints(p0, p1, |p| p.y);
            bresenham((a.y, a.x), (b.y, b.x), |y, x| {
                canvas.plot(x, y, color);
            });
        }
    }
}

/// Split a fractional minor position into the alphas of the floor pixel and
/// its successor. Floor truncation means the pair sums to 254 or 255.
pub fn coverage(dist: f64) -> (u8, u8) {
    let near = ((1.0 - dist) * 255.0).floor() as u8;
    let far = (dist * 255.0).floor() as u8;
    (near, far)
}

/// Walk a line with a fractional minor coordinate. `plot` receives
/// (major, floor of minor, fractional part).
fn wu(
    (major0, minor0): (i32, i32),
    (major1, minor1): (i32, i32),
    mut plot: impl FnMut(i32, i32, f64),
) {
    let major_delta = f64::from(major1) - f64::from(major0);
    if major_delta <= 0.0 {
        return;
    }
    let mut k = (f64::from(minor1) - f64::from(minor0)).abs() / major_delta;
    if minor0 > minor1 {
        k = -k;
    }

    let mut minor = f64::from(minor0);
    for major in major0..major1 {
        minor += k;
        let base = minor.floor();
        plot(major, base as i32, minor - base);
    }
}

/// Draw an anti-aliased line (Xiaolin Wu).
///
/// Every step paints two adjacent pixels across the minor axis with `color`,
/// their alpha channels replaced by the share of the ideal line falling on
/// each. Successor pixels past the canvas edge are skipped.
pub fn draw_line_aa(canvas: &mut Canvas, p0: Point, p1: Point, color: Color) {
    let Some((p0, p1)) = clip_line(canvas, p0, p1) else {
        return;
    };

    match major_axis(p0, p1) {
        Major::X => {
            let (a, b) = order_endpoints(p0, p1, |p| p.x);
            wu((a.x, a.y), (b.x, b.y), |x, y, dist| {
                let (near, far) = coverage(dist);
                canvas.plot(x, y, color.with_alpha(near));
                canvas.plot(x, y + 1, color.with_alpha(far));
            });
        }
        Major::Y => {
            let (a, b) = order_endpoints(p0, p1, |p| p.y);
            wu((a.y, a.x), (b.y, b.x), |y, x, dist| {
                let (near, far) = coverage(dist);
                canvas.plot(x, y, color.with_alpha(near));
                canvas.plot(x + 1, y, color.with_alpha(far));
            });
        }
    }
}
