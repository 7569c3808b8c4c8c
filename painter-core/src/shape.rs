//! Solid rectangle and disc fills, plus a rectangle outline.

use crate::{clip_rect, Canvas, Color, Point, Rect};

/// Fill the part of `rect` that lies on the canvas.
pub fn fill_rect(canvas: &mut Canvas, rect: Rect, color: Color) {
    let r = clip_rect(canvas, rect);
    for y in r.y..r.bottom() {
        for x in r.x..r.right() {
            canvas.set(x, y, color);
        }
    }
}

/// Fill every pixel whose squared distance to `center` is at most `radius²`.
///
/// A radius of zero paints the center pixel only; a negative radius paints
/// nothing.
pub fn fill_circle(canvas: &mut Canvas, center: Point, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }
    let r = clip_rect(canvas, Rect::around(center, radius));
    let radius_sq = i64::from(radius) * i64::from(radius);
    for y in r.y..r.bottom() {
        let dy = i64::from(y) - i64::from(center.y);
        for x in r.x..r.right() {
            let dx = i64::from(x) - i64::from(center.x);
            if dx * dx + dy * dy <= radius_sq {
                canvas.set(x, y, color);
            }
        }
    }
}

/// One-pixel outline along the inside edge of `rect`
pub fn stroke_rect(canvas: &mut Canvas, rect: Rect, color: Color) {
    if rect.is_empty() {
        return;
    }
    let Rect { x, y, width, height } = rect;
    fill_rect(canvas, Rect::new(x, y, width, 1), color);
    fill_rect(canvas, Rect::new(x, rect.bottom() - 1, width, 1), color);
    fill_rect(canvas, Rect::new(x, y, 1, height), color);
    fill_rect(canvas, Rect::new(rect.right() - 1, y, 1, height), color);
}
