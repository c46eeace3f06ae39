//! Monochrome thermal raster conversion
//!
//! Packs an RGBA bitmap into the 1-bit-per-pixel row-major bitstream thermal
//! printer firmware consumes: luminance threshold, MSB-first bits, rows
//! padded to a byte boundary.

use crate::bitmap::Bitmap;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Packed 1bpp raster payload
///
/// `width`/`height` are the real pixel dimensions; each row occupies
/// `ceil(width / 8)` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterData {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl RasterData {
    /// Unpadded pixel width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height (row count)
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes
    pub fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Packed bit buffer, row-major, MSB first
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume into the packed bit buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Standard base64, for embedding in text-based print payloads
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Convert a bitmap to 1bpp: a pixel burns (bit = 1) when its luminance
/// `0.299 R + 0.587 G + 0.114 B` falls below `threshold`. Alpha is ignored.
///
/// Rows are padded to a byte boundary; pad columns replicate the last real
/// column rather than padding white.
pub fn rasterize(bitmap: &Bitmap, threshold: u8) -> RasterData {
    let w = bitmap.width();
    let h = bitmap.height();
    let stride = (w as usize).div_ceil(8);

    let mut bytes = Vec::with_capacity(stride * h as usize);

    for y in 0..h {
        for byte_x in 0..stride as u32 {
            let mut byte = 0u8;
            for bit in 0..8u32 {
                let x = (byte_x * 8 + bit).min(w - 1);
                let px = bitmap.pixel(x, y);
                let luma =
                    0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
                if luma < threshold as f32 {
                    byte |= 1 << (7 - bit);
                }
            }
            bytes.push(byte);
        }
    }

    RasterData {
        width: w,
        height: h,
        bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> Bitmap {
        let data = [rgb[0], rgb[1], rgb[2], 255].repeat((w * h) as usize);
        Bitmap::from_rgba(w, h, data).unwrap()
    }

    #[test]
    fn test_byte_length_formula() {
        for (w, h) in [(1u32, 1u32), (7, 3), (8, 3), (9, 3), (576, 737)] {
            let raster = rasterize(&solid(w, h, [255, 255, 255]), 160);
            assert_eq!(raster.bytes().len(), (w as usize).div_ceil(8) * h as usize);
            assert_eq!(raster.stride(), (w as usize).div_ceil(8));
        }
    }

    #[test]
    fn test_all_white_is_all_zero() {
        let raster = rasterize(&solid(20, 10, [255, 255, 255]), 160);
        assert!(raster.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_all_ink_sets_every_bit() {
        // width 10 -> 6 pad columns per row, clamped to the (black) last column
        let raster = rasterize(&solid(10, 4, [0, 0, 0]), 160);
        assert!(raster.bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_msb_first_packing() {
        let mut data = vec![255u8; 8 * 1 * 4];
        // only pixel x=0 is black
        data[0] = 0;
        data[1] = 0;
        data[2] = 0;
        let bmp = Bitmap::from_rgba(8, 1, data).unwrap();

        let raster = rasterize(&bmp, 160);
        assert_eq!(raster.bytes(), &[0x80]);
    }

    #[test]
    fn test_pad_columns_replicate_last_column() {
        // width 10: only x=9 is black, so bits for x=9..15 are set
        let mut data = vec![255u8; 10 * 1 * 4];
        let i = 9 * 4;
        data[i] = 0;
        data[i + 1] = 0;
        data[i + 2] = 0;
        let bmp = Bitmap::from_rgba(10, 1, data).unwrap();

        let raster = rasterize(&bmp, 160);
        assert_eq!(raster.bytes(), &[0x00, 0x7F]);
    }

    #[test]
    fn test_luminance_weights() {
        // pure green: L = 0.587 * 255 = 149.685, below 160 -> burns
        let raster = rasterize(&solid(8, 1, [0, 255, 0]), 160);
        assert_eq!(raster.bytes(), &[0xFF]);
        // but not below 140
        let raster = rasterize(&solid(8, 1, [0, 255, 0]), 140);
        assert_eq!(raster.bytes(), &[0x00]);
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        // L = 100 exactly; bit set only when L < threshold
        let raster = rasterize(&solid(8, 1, [100, 100, 100]), 100);
        assert_eq!(raster.bytes(), &[0x00]);
        let raster = rasterize(&solid(8, 1, [100, 100, 100]), 101);
        assert_eq!(raster.bytes(), &[0xFF]);
    }

    #[test]
    fn test_base64_round_trip() {
        let raster = rasterize(&solid(8, 2, [0, 0, 0]), 160);
        let encoded = raster.to_base64();
        let decoded = STANDARD.decode(&encoded).unwrap();
        assert_eq!(decoded, raster.bytes());
    }
}
