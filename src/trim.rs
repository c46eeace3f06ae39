//! Content-box margin trimming
//!
//! Scans a page for its non-white content bounding box and crops to it plus
//! a configurable padding margin. Blank or already-tight pages pass through
//! unchanged.

use crate::bitmap::Bitmap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// RGB level at or above which a pixel counts as white (alpha ignored)
const WHITE_THRESHOLD: u8 = 250;

/// Slack below which trimming is skipped and the original page returned
const TRIM_SLACK_PX: u32 = 10;

/// Padding re-added around the detected content box, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Margins {
    /// Same padding on all four sides
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(8)
    }
}

fn is_white(px: [u8; 4]) -> bool {
    px[0] >= WHITE_THRESHOLD && px[1] >= WHITE_THRESHOLD && px[2] >= WHITE_THRESHOLD
}

/// Crop a bitmap to its non-white content plus `margins` padding.
///
/// The expanded box is clamped to the bitmap bounds. When it would reclaim
/// less than 10 px of slack in both dimensions the input is returned
/// unchanged; a fully blank page degenerates to the full bounds and takes
/// the same path. The crop is composited over white, flattening any source
/// transparency.
pub fn trim(bitmap: &Bitmap, margins: &Margins) -> Bitmap {
    let w = bitmap.width();
    let h = bitmap.height();

    // Scan each edge independently for the first non-white row/column.
    // A blank page leaves all four at their init values (full bounds).
    let mut top = 0u32;
    'top: for y in 0..h {
        for x in 0..w {
            if !is_white(bitmap.pixel(x, y)) {
                top = y;
                break 'top;
            }
        }
    }

    let mut bottom = h - 1;
    'bottom: for y in (0..h).rev() {
        for x in 0..w {
            if !is_white(bitmap.pixel(x, y)) {
                bottom = y;
                break 'bottom;
            }
        }
    }

    let mut left = 0u32;
    'left: for x in 0..w {
        for y in 0..h {
            if !is_white(bitmap.pixel(x, y)) {
                left = x;
                break 'left;
            }
        }
    }

    let mut right = w - 1;
    'right: for x in (0..w).rev() {
        for y in 0..h {
            if !is_white(bitmap.pixel(x, y)) {
                right = x;
                break 'right;
            }
        }
    }

    // Expand by the configured margins, clamped to the page bounds
    let x0 = left.saturating_sub(margins.left);
    let y0 = top.saturating_sub(margins.top);
    let x1 = (right + margins.right).min(w - 1);
    let y1 = (bottom + margins.bottom).min(h - 1);

    let crop_w = x1 - x0 + 1;
    let crop_h = y1 - y0 + 1;

    // Not enough slack to be worth a new allocation
    if crop_w >= w.saturating_sub(TRIM_SLACK_PX) && crop_h >= h.saturating_sub(TRIM_SLACK_PX) {
        return bitmap.clone();
    }

    debug!(
        from_w = w,
        from_h = h,
        to_w = crop_w,
        to_h = crop_h,
        "trimmed content box"
    );

    // White-backed crop: blend each source pixel over opaque white
    let mut data = vec![255u8; crop_w as usize * crop_h as usize * 4];
    for y in 0..crop_h {
        for x in 0..crop_w {
            let px = bitmap.pixel(x0 + x, y0 + y);
            let a = px[3] as u32;
            let i = (y as usize * crop_w as usize + x as usize) * 4;
            for c in 0..3 {
                data[i + c] = ((px[c] as u32 * a + 255 * (255 - a)) / 255) as u8;
            }
            data[i + 3] = 255;
        }
    }

    Bitmap::from_rgba(crop_w, crop_h, data).expect("crop buffer sized to crop box")
}
