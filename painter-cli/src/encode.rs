//! Image file encoders for a finished canvas.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use painter_core::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Ppm,
    Gif,
}

impl OutputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "ppm" | "pnm" => Some(OutputFormat::Ppm),
            "gif" => Some(OutputFormat::Gif),
            _ => None,
        }
    }
}

/// Write `canvas` to `path` in `format`
pub fn save(canvas: &Canvas, path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Png => canvas
            .to_image()
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("failed to write PNG: {:?}", path)),
        OutputFormat::Ppm | OutputFormat::Gif => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {:?}", path))?;
            let mut out = BufWriter::new(file);
            if format == OutputFormat::Ppm {
                write_ppm(canvas, &mut out)?;
            } else {
                write_gif(canvas, &mut out)?;
            }
            out.flush().context("failed to flush output file")?;
            Ok(())
        }
    }
}

/// Binary PPM (`P6`): header then RGB triples, alpha dropped
pub fn write_ppm<W: Write>(canvas: &Canvas, out: &mut W) -> anyhow::Result<()> {
    write!(out, "P6\n{} {}\n255\n", canvas.width(), canvas.height())?;
    out.write_all(&canvas.to_rgb_bytes())?;
    Ok(())
}

/// Single-frame GIF. Exact colors fill the 256-entry palette first; any
/// further colors map to their nearest palette entry.
pub fn write_gif<W: Write>(canvas: &Canvas, out: &mut W) -> anyhow::Result<()> {
    let width = u16::try_from(canvas.width()).context("GIF width exceeds 65535")?;
    let height = u16::try_from(canvas.height()).context("GIF height exceeds 65535")?;

    let (pixels, palette) = quantize(canvas);
    let flat_palette: Vec<u8> = palette.iter().flat_map(|c| c.iter().copied()).collect();

    let mut encoder = gif::Encoder::new(out, width, height, &[])?;
    let frame = gif::Frame::from_palette_pixels(width, height, pixels, flat_palette, None);
    encoder.write_frame(&frame)?;
    Ok(())
}

/// Palette indices per pixel plus a 256-entry palette
fn quantize(canvas: &Canvas) -> (Vec<u8>, Vec<[u8; 3]>) {
    let mut pixels: Vec<u8> = Vec::with_capacity(canvas.pixel_count());
    let mut palette: Vec<[u8; 3]> = Vec::new();

    for color in canvas.pixels() {
        let rgb = color.to_rgb();
        let idx = palette.iter().position(|&c| c == rgb).unwrap_or_else(|| {
            if palette.len() < 256 {
                palette.push(rgb);
                palette.len() - 1
            } else {
                palette
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, c)| {
                        let dr = c[0] as i32 - rgb[0] as i32;
                        let dg = c[1] as i32 - rgb[1] as i32;
                        let db = c[2] as i32 - rgb[2] as i32;
                        dr * dr + dg * dg + db * db
                    })
                    .map(|(i, _)| i)
                    .unwrap_or(0)
            }
        });
        pixels.push(idx as u8);
    }

    while palette.len() < 256 {
        palette.push([0, 0, 0]);
    }
    (pixels, palette)
}
