//! RGBA bitmap value type
//!
//! Every pipeline step consumes a `Bitmap` and produces a new one; nothing
//! mutates a pixel buffer in place. This keeps the transformations pure and
//! directly testable.

use crate::error::{RasterError, RasterResult};
use image::{Rgba, RgbaImage};

/// RGBA bitmap: 4 bytes per pixel, row-major, top-to-bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap from a raw RGBA buffer
    ///
    /// The buffer length must be exactly `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> RasterResult<Self> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(RasterError::Decode(format!(
                "invalid bitmap size: {}x{} with {} bytes",
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a white-filled bitmap
    pub fn white(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![255; width as usize * height as usize * 4],
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA buffer
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA channels of the pixel at (x, y)
    ///
    /// Callers must stay within bounds; all pipeline loops iterate
    /// `0..width` / `0..height`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Bridge to an `image` crate buffer
    pub(crate) fn to_image(&self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .expect("bitmap length invariant")
    }

    /// Bridge from an `image` crate buffer
    pub(crate) fn from_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(img: RgbaImage) -> Self {
        Self::from_image(img)
    }
}

/// Opaque white, the background every composite lands on
pub(crate) const WHITE_PIXEL: Rgba<u8> = Rgba([255, 255, 255, 255]);
