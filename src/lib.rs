//! # thermal-raster
//!
//! Thermal receipt raster pipeline - converts page bitmaps into the form a
//! thermal printer consumes.
//!
//! ## Scope
//!
//! This crate handles HOW page content becomes printer dots:
//! - Margin trimming to the non-white content box
//! - Proportional scaling to a fixed paper width (576 dots = 80mm, 384 = 58mm)
//! - Luminance-threshold monochrome conversion to packed 1bpp raster
//! - Per-page orchestration producing a PNG preview plus the print payload
//!
//! Document decoding (WHAT the pages are) and transport (WHERE the payload
//! goes) stay outside:
//! - PDF/image page rendering → a [`PageSource`] implementation
//! - Wire protocol and job submission → the print transport layer
//!
//! ## Example
//!
//! ```ignore
//! use thermal_raster::{process_document, PngPreviewEncoder, ProcessConfig};
//!
//! // 80mm paper, 8px margins, threshold 160
//! let config = ProcessConfig::default();
//!
//! let mut source = PdfSource::open("receipt.pdf")?;
//! let pages = process_document(&mut source, &config, &PngPreviewEncoder).await?;
//!
//! for page in &pages {
//!     ui.show_preview(&page.preview);
//!     transport.submit(page.width, page.height, page.raster.to_base64()).await?;
//! }
//! ```

mod bitmap;
mod config;
mod error;
mod mono;
mod pipeline;
mod scale;
mod source;
mod trim;

// Re-exports
pub use bitmap::Bitmap;
pub use config::{PAPER_WIDTH_58MM, PAPER_WIDTH_80MM, ProcessConfig};
pub use error::{RasterError, RasterResult};
pub use mono::{RasterData, rasterize};
pub use pipeline::{ProcessedPage, process_document, process_page};
pub use scale::scale_to_width;
pub use source::{PageSource, PngPreviewEncoder, PreviewEncoder};
pub use trim::{Margins, trim};
