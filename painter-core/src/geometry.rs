//! Integer point and rectangle types.

/// 2D integer position. Validity is relative to a [`Canvas`](crate::Canvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, widened so it cannot overflow
    pub fn dist_sq(&self, other: &Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Manhattan (taxicab) distance
    pub fn manhattan(&self, other: &Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx.abs() + dy.abs()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned integer rectangle.
///
/// Width and height are signed so that unclipped input can describe inverted
/// or off-canvas regions; [`clip_rect`](crate::clip_rect) normalises them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Square of side `2 * radius + 1` centred on `center`
    pub fn around(center: Point, radius: i32) -> Self {
        let side = radius.saturating_mul(2).saturating_add(1);
        Self::new(
            center.x.saturating_sub(radius),
            center.y.saturating_sub(radius),
            side,
            side,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn area(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.width as u64 * self.height as u64
        }
    }
}

/// Order two endpoints so that `key` is non-decreasing from the first to the
/// second. Whole points move together, never single coordinates.
pub fn order_endpoints(p0: Point, p1: Point, key: impl Fn(&Point) -> i32) -> (Point, Point) {
    if key(&p0) > key(&p1) {
        (p1, p0)
    } else {
        (p0, p1)
    }
}
