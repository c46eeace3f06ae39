//! Capability boundaries consumed by the pipeline
//!
//! Page rendering and preview encoding stay behind narrow traits so the
//! pipeline never touches document formats or platform image APIs directly.

use crate::bitmap::Bitmap;
use crate::error::{RasterError, RasterResult};

/// Trait for page bitmap sources
///
/// A source renders one page at a time; rendering is the pipeline's only
/// suspension point. Takes `&mut self` because typical embeddable document
/// decoders tolerate a single in-flight render per session.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Number of pages in the document
    fn page_count(&self) -> u32;

    /// Render a page to an RGBA bitmap at `scale` times its natural size
    ///
    /// Fails with [`RasterError::Decode`] when the document is corrupt or
    /// the page index is out of range.
    async fn render(&mut self, page: u32, scale: f32) -> RasterResult<Bitmap>;
}

/// Trait for lossless preview encoders
pub trait PreviewEncoder {
    /// Encode a bitmap for UI display
    fn encode(&self, bitmap: &Bitmap) -> RasterResult<Vec<u8>>;
}

/// PNG preview encoder backed by the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct PngPreviewEncoder;

impl PreviewEncoder for PngPreviewEncoder {
    fn encode(&self, bitmap: &Bitmap) -> RasterResult<Vec<u8>> {
        let mut out = std::io::Cursor::new(Vec::new());
        bitmap
            .to_image()
            .write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| RasterError::Encoding(e.to_string()))?;
        Ok(out.into_inner())
    }
}
