//! Owned row-major RGBA pixel buffer.

use crate::{Color, PainterError, Result};

/// Exclusively-owned `width * height` pixel buffer in row-major order with no
/// padding between rows.
///
/// [`set`](Canvas::set) and [`get`](Canvas::get) treat out-of-range
/// coordinates as a caller bug and panic. Drawing code clips first and only
/// uses [`plot`](Canvas::plot) where a step may land one pixel outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Allocate a zero-initialized (transparent black) canvas.
    ///
    /// Fails with [`PainterError::Allocation`] when `width * height` overflows
    /// or the allocator cannot satisfy the request.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let alloc_err = || PainterError::Allocation { width, height };
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len.checked_mul(std::mem::size_of::<Color>()).is_some())
            .ok_or_else(alloc_err)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| alloc_err())?;
        pixels.resize(len, Color::TRANSPARENT);

        log::debug!("allocated {}x{} canvas ({} pixels)", width, height, len);
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Overwrite every pixel
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.contains(x, y),
            "pixel ({}, {}) outside {}x{} canvas",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Write one pixel. Panics if `(x, y)` is outside the canvas.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Read one pixel. Panics if `(x, y)` is outside the canvas.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Write one pixel if it lies on the canvas; returns whether it did.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Color) -> bool {
        if self.contains(x, y) {
            self.set(x, y, color);
            true
        } else {
            false
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// One row of pixels
    pub fn row(&self, y: u32) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// RGBA bytes in row-major order, 4 bytes per pixel, no row padding
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// RGB bytes (alpha dropped), for encoders without an alpha channel
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgb()).collect()
    }

    /// Copy into an `image::RgbaImage`
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.pixels[y as usize * self.width as usize + x as usize].to_array())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let canvas = Canvas::new(4, 3).unwrap();
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.pixel_count(), 12);
        assert!(canvas.pixels().iter().all(|&c| c == Color::TRANSPARENT));
    }

    #[test]
    fn test_allocation_failure() {
        let err = Canvas::new(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(
            err,
            PainterError::Allocation { width: u32::MAX, height: u32::MAX }
        ));
    }

    #[test]
    fn test_fill_is_idempotent() {
        let color = Color::from_packed(0xFF50_5050);
        let mut once = Canvas::new(7, 5).unwrap();
        once.fill(color);
        let mut twice = once.clone();
        twice.fill(color);
        assert_eq!(once, twice);
        assert!(once.pixels().iter().all(|&c| c == color));
    }

    #[test]
    fn test_set_get_row_major() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.set(2, 1, Color::RED);
        assert_eq!(canvas.get(2, 1), Color::RED);
        assert_eq!(canvas.pixels()[5], Color::RED);
        assert_eq!(canvas.row(1).unwrap()[2], Color::RED);
        assert!(canvas.row(2).is_none());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_out_of_range_panics() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.set(3, 0, Color::RED);
    }

    #[test]
    fn test_plot_skips_out_of_range() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        assert!(!canvas.plot(-1, 0, Color::RED));
        assert!(!canvas.plot(0, 2, Color::RED));
        assert!(canvas.plot(0, 1, Color::RED));
        assert_eq!(canvas.get(0, 1), Color::RED);
    }

    #[test]
    fn test_byte_views() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.set(1, 0, Color::rgba(1, 2, 3, 4));
        assert_eq!(canvas.as_bytes(), &[0, 0, 0, 0, 1, 2, 3, 4]);
        assert_eq!(canvas.to_rgb_bytes(), vec![0, 0, 0, 1, 2, 3]);

        let image = canvas.to_image();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.as_raw().as_slice(), canvas.as_bytes());
    }
}
