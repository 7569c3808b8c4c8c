//! Reduce rectangles and line endpoints to the canvas bounds.

use crate::{Canvas, Point, Rect};

/// Canvas dimensions as signed coordinates
fn bounds(canvas: &Canvas) -> (i32, i32) {
    let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
    (clamp(canvas.width()), clamp(canvas.height()))
}

/// Intersect `rect` with the canvas.
///
/// The result satisfies `0 <= x`, `0 <= y`, `x + width <= canvas.width` and
/// `y + height <= canvas.height`. Rectangles that miss the canvas, or have a
/// negative size, come back with zero width or height.
pub fn clip_rect(canvas: &Canvas, rect: Rect) -> Rect {
    let (w, h) = bounds(canvas);
    let x0 = rect.x.clamp(0, w);
    let y0 = rect.y.clamp(0, h);
    let x1 = rect.right().clamp(0, w);
    let y1 = rect.bottom().clamp(0, h);
    Rect::new(x0, y0, (x1 - x0).max(0), (y1 - y0).max(0))
}

/// Slide a line endpoint along the line's own slope until it sits on the
/// canvas boundary.
///
/// `dx` and `dy` are the signed deltas of the whole line. The x axis is
/// corrected first, then y. When the delta of the axis being corrected is zero
/// the line runs parallel to that boundary and the coordinate is clamped
/// directly.
pub fn clip_line_endpoint(x: i32, y: i32, dx: i32, dy: i32, width: i32, height: i32) -> Point {
    let (mut x, mut y) = (i64::from(x), i64::from(y));
    let (dx, dy) = (i64::from(dx), i64::from(dy));
    let max_x = i64::from(width) - 1;
    let max_y = i64::from(height) - 1;

    if x > max_x {
        if dx != 0 {
            y -= dy * (x - max_x) / dx;
        }
        x = max_x;
    } else if x < 0 {
        if dx != 0 {
            y -= dy * x / dx;
        }
        x = 0;
    }

    if y > max_y {
        if dy != 0 {
            x -= dx * (y - max_y) / dy;
        }
        y = max_y;
    } else if y < 0 {
        if dy != 0 {
            x -= dx * y / dy;
        }
        y = 0;
    }

    Point::new(saturate(x), saturate(y))
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Clip both endpoints of a line against the canvas.
///
/// Returns `None` when nothing of the segment can be visible: both endpoints
/// lie on one outer side of the canvas, or the line passes outside a corner
/// so sliding cannot bring an endpoint onto the boundary. Slid endpoints may
/// be off by one pixel from integer rounding; they are clamped onto the
/// canvas.
pub fn clip_line(canvas: &Canvas, p0: Point, p1: Point) -> Option<(Point, Point)> {
    let (w, h) = bounds(canvas);
    if w == 0 || h == 0 {
        return None;
    }
    if (p0.x < 0 && p1.x < 0)
        || (p0.y < 0 && p1.y < 0)
        || (p0.x >= w && p1.x >= w)
        || (p0.y >= h && p1.y >= h)
    {
        return None;
    }

    let dx = p1.x.saturating_sub(p0.x);
    let dy = p1.y.saturating_sub(p0.y);
    let a = clip_line_endpoint(p0.x, p0.y, dx, dy, w, h);
    let b = clip_line_endpoint(p1.x, p1.y, dx, dy, w, h);

    let near = |p: Point| p.x >= -1 && p.y >= -1 && p.x <= w && p.y <= h;
    if !near(a) || !near(b) {
        return None;
    }
    let onto = |p: Point| Point::new(p.x.clamp(0, w - 1), p.y.clamp(0, h - 1));
    Some((onto(a), onto(b)))
}
