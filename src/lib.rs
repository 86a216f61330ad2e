//! A library to extract the most frequent colors from an image.
//!
//! Images are decoded, normalized to RGB, downscaled to a fixed
//! [`RESIZE_WIDTH`]×[`RESIZE_HEIGHT`] grid, and tallied pixel by pixel; the
//! most frequent colors come back as lowercase `#rrggbb` hex strings. The
//! downscale bounds the work per image and approximates the overall color
//! distribution rather than any per-pixel exactness.

mod error;
mod histogram;
mod swatch;

pub use crate::{
    error::{ExtractError, Result},
    swatch::Swatch,
};
pub use image;

use image::{
    imageops, imageops::FilterType, io::Reader as ImageReader, DynamicImage, GenericImageView,
};
use log::debug;
use std::path::Path;

/// Width of the grid every image is resized to before counting.
pub const RESIZE_WIDTH: u32 = 100;
/// Height of the grid every image is resized to before counting.
pub const RESIZE_HEIGHT: u32 = 100;
/// Number of colors returned when the caller does not choose one.
pub const DEFAULT_NUM_COLORS: usize = 5;

/// Extract the `num_colors` most frequent colors from the image file at
/// `path`, formatted as lowercase `#rrggbb` hex strings.
///
/// The result is ordered by descending occurrence count over the resized
/// 100×100 grid; equal counts rank the color scanned first (row-major,
/// top-left to bottom-right) ahead. If the image holds fewer distinct colors
/// than `num_colors`, all of them are returned.
///
/// # Errors
///
/// Returns [`ExtractError`] when the file is missing, its format is
/// unsupported, or decoding fails.
///
/// # Example
///
/// ```no_run
/// let colors = extract_colors::extract_dominant_colors("photo.jpg", 5)?;
/// println!("{colors:?}");
/// # Ok::<(), extract_colors::ExtractError>(())
/// ```
pub fn extract_dominant_colors<P>(path: P, num_colors: usize) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let reader = ImageReader::open(path).map_err(|e| ExtractError::from_io(path, e))?;
    let image = reader
        .decode()
        .map_err(|e| ExtractError::from_image(path, e))?;

    debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(dominant_swatches(&image, num_colors)
        .into_iter()
        .map(Swatch::hex)
        .collect())
}

/// Extract the `num_colors` most frequent colors from an already-decoded
/// image, with their populations.
///
/// This is the pipeline behind [`extract_dominant_colors`] minus the
/// filesystem: normalize to RGB (dropping alpha or converting other color
/// models), resize to exactly 100×100, and count. Useful when the image was
/// produced in memory or when the occurrence counts matter.
pub fn dominant_swatches(image: &DynamicImage, num_colors: usize) -> Vec<Swatch> {
    let rgb = image.to_rgb8();
    let resized = imageops::resize(&rgb, RESIZE_WIDTH, RESIZE_HEIGHT, FilterType::Nearest);

    // ImageBuffer iterates pixels row-major, which fixes the first-seen
    // order the tie-break below relies on
    let counts = histogram::count_colors(resized.pixels());
    debug!("{} distinct colors in resized grid", counts.len());

    histogram::most_common(counts, num_colors)
}
