//! Page processing pipeline
//!
//! Orchestrates render, trim, scale, preview encoding and rasterization per
//! page. Stateless: each call is a pure transformation of one page, and a
//! multi-page run is just the pages in document order.

use crate::config::ProcessConfig;
use crate::error::RasterResult;
use crate::mono::{RasterData, rasterize};
use crate::scale::scale_to_width;
use crate::source::{PageSource, PreviewEncoder};
use crate::trim::trim;
use tracing::{info, instrument};

/// Output of processing a single page
///
/// Preview and raster are derived from the same final bitmap, so they are
/// pixel-consistent. `width`/`height` describe that final bitmap; the raster
/// rows carry `ceil(width / 8)` bytes each.
#[derive(Debug, Clone)]
pub struct ProcessedPage {
    /// Lossless preview of the final bitmap (PNG)
    pub preview: Vec<u8>,

    /// Packed 1bpp print payload
    pub raster: RasterData,

    /// Final bitmap width after trim/scale, unpadded
    pub width: u32,

    /// Final bitmap height after trim/scale
    pub height: u32,
}

/// Process a single page
///
/// Renders the page at `config.render_scale`, then (when `config.enabled`)
/// trims margins and scales to the target width, then encodes the preview
/// and rasterizes the same final bitmap. Fails without partial output.
#[instrument(skip(source, config, encoder))]
pub async fn process_page<S, E>(
    source: &mut S,
    page: u32,
    config: &ProcessConfig,
    encoder: &E,
) -> RasterResult<ProcessedPage>
where
    S: PageSource,
    E: PreviewEncoder,
{
    config.validate()?;

    let mut bitmap = source.render(page, config.render_scale).await?;

    if config.enabled {
        bitmap = trim(&bitmap, &config.margins);
        if let Some(width) = config.target_width {
            bitmap = scale_to_width(&bitmap, width);
        }
    }

    let preview = encoder.encode(&bitmap)?;
    let raster = rasterize(&bitmap, config.threshold_u8());

    info!(
        page,
        width = bitmap.width(),
        height = bitmap.height(),
        raster_len = raster.bytes().len(),
        "page processed"
    );

    Ok(ProcessedPage {
        width: bitmap.width(),
        height: bitmap.height(),
        preview,
        raster,
    })
}

/// Process every page of a document, in order
///
/// The configuration is validated before the first page is rendered. The
/// run fails fast at the first failing page; no partial result is returned.
#[instrument(skip_all)]
pub async fn process_document<S, E>(
    source: &mut S,
    config: &ProcessConfig,
    encoder: &E,
) -> RasterResult<Vec<ProcessedPage>>
where
    S: PageSource,
    E: PreviewEncoder,
{
    config.validate()?;

    let count = source.page_count();
    let mut pages = Vec::with_capacity(count as usize);
    for page in 0..count {
        pages.push(process_page(source, page, config, encoder).await?);
    }

    info!(pages = pages.len(), "document processed");
    Ok(pages)
}
