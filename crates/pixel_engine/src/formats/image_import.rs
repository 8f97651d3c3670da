//! Image to grid conversion
//!
//! Resamples a raster image to exactly `side_length × side_length` pixels and
//! turns every pixel into a cell token, in row-major order.

use std::path::Path;

use image::{imageops::FilterType, DynamicImage};

use crate::{Result, Rgba, EMPTY_CELL};

/// Converts `img` into `side_length²` color tokens.
///
/// Fully transparent pixels become unpainted cells; every other pixel becomes
/// [`Rgba::to_token`]. A zero side length yields no cells.
pub fn cells_from_image(img: &DynamicImage, side_length: usize) -> Vec<String> {
    let Ok(side) = u32::try_from(side_length) else {
        return Vec::new();
    };
    if side == 0 {
        return Vec::new();
    }

    let sampled = if img.width() == side && img.height() == side {
        img.to_rgba8()
    } else {
        img.resize_exact(side, side, FilterType::Triangle).to_rgba8()
    };

    sampled
        .pixels()
        .map(|p| {
            let color = Rgba::from(p.0);
            if color.a == 0 {
                EMPTY_CELL.to_string()
            } else {
                color.to_token()
            }
        })
        .collect()
}

/// Opens the image at `path` and converts it with [`cells_from_image`].
///
/// # Errors
///
/// Returns [`crate::EngineError::Image`] if the file cannot be read or decoded.
pub fn import_image(path: &Path, side_length: usize) -> Result<Vec<String>> {
    let img = image::open(path)?;
    log::info!(
        "Importing {}x{} image {} into a {}x{} grid",
        img.width(),
        img.height(),
        path.display(),
        side_length,
        side_length
    );
    Ok(cells_from_image(&img, side_length))
}
