//! Proportional scaling to a fixed paper width
//!
//! Thermal printers expect an exact dot width per paper class (576 dots for
//! 80mm, 384 for 58mm). Heights follow the source aspect ratio.

use crate::bitmap::{Bitmap, WHITE_PIXEL};
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Resize a bitmap to exactly `target_width`, preserving aspect ratio.
///
/// `target_height = round(target_width * height / width)`. The output is
/// composited over white, so any source transparency is flattened.
pub fn scale_to_width(bitmap: &Bitmap, target_width: u32) -> Bitmap {
    let target_height = ((target_width as f64 * bitmap.height() as f64
        / bitmap.width() as f64)
        .round() as u32)
        .max(1);

    if bitmap.width() == target_width && bitmap.height() == target_height {
        return bitmap.clone();
    }

    let resized = imageops::resize(
        &bitmap.to_image(),
        target_width,
        target_height,
        FilterType::Triangle,
    );

    let mut canvas = RgbaImage::from_pixel(target_width, target_height, WHITE_PIXEL);
    imageops::overlay(&mut canvas, &resized, 0, 0);

    Bitmap::from_image(canvas)
}
