//! Rasterising a grid to RGBA pixels and PNG.
//!
//! Every cell becomes a `pixel_size × pixel_size` block. Unpainted cells stay
//! fully transparent, so an exported picture keeps the empty background.

use std::{fs::File, io::BufWriter, io::Write, path::Path};

use crate::{EngineError, Grid, Result, Rgba};

/// Renders `grid` into a square RGBA8 buffer.
///
/// Returns the edge length in pixels together with the pixel data.
///
/// # Errors
///
/// [`EngineError::InvalidDimension`] for a zero side length or pixel size,
/// [`EngineError::DimensionMismatch`] if the grid is not `side_length²` cells,
/// [`EngineError::InvalidColor`] for a token that cannot be turned into a color.
pub fn render_to_rgba(grid: &Grid, side_length: usize, pixel_size: u32) -> Result<(u32, Vec<u8>)> {
    let expected = crate::cell_count(side_length)?;
    if grid.len() != expected {
        return Err(EngineError::DimensionMismatch {
            expected,
            actual: grid.len(),
        });
    }
    if pixel_size == 0 {
        return Err(EngineError::InvalidDimension { side_length: 0 });
    }

    let edge = u32::try_from(side_length)
        .ok()
        .and_then(|s| s.checked_mul(pixel_size))
        .ok_or(EngineError::InvalidDimension { side_length })?;
    let edge_px = edge as usize;
    let pixel_size = pixel_size as usize;

    // Resolve every token once, then fill.
    let colors: Vec<Rgba> = grid
        .iter()
        .map(|token| Rgba::parse(token).map(|c| c.unwrap_or(Rgba::TRANSPARENT)))
        .collect::<Result<_>>()?;

    let mut data = vec![0u8; edge_px * edge_px * 4];
    for (i, color) in colors.iter().enumerate() {
        if color.a == 0 {
            continue;
        }
        let col = i % side_length;
        let row = i / side_length;
        let rgba = color.to_array();
        for y in row * pixel_size..(row + 1) * pixel_size {
            let line = y * edge_px;
            for x in col * pixel_size..(col + 1) * pixel_size {
                let idx = (line + x) * 4;
                data[idx..idx + 4].copy_from_slice(&rgba);
            }
        }
    }

    Ok((edge, data))
}

/// Encodes `grid` as a PNG image into `writer`.
///
/// # Errors
///
/// See [`render_to_rgba`]; PNG encoder failures are returned as [`EngineError::PngEncoding`].
pub fn write_png<W: Write>(grid: &Grid, side_length: usize, pixel_size: u32, writer: W) -> Result<()> {
    let (edge, data) = render_to_rgba(grid, side_length, pixel_size)?;

    let mut encoder = png::Encoder::new(writer, edge, edge);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(())
}

/// Writes `grid` as a PNG file to `path`.
///
/// # Errors
///
/// See [`write_png`]; file creation failures are returned as [`EngineError::Io`].
pub fn save_png(grid: &Grid, side_length: usize, pixel_size: u32, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_png(grid, side_length, pixel_size, BufWriter::new(file))?;
    log::info!("Exported {}x{} grid to {}", side_length, side_length, path.display());
    Ok(())
}
