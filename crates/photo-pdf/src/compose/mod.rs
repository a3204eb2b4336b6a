//! Photo composition - one page per photo
//!
//! This module drives a run:
//! 1. Decode each photo in order (awaited one at a time)
//! 2. Compute its placement for the selected fit strategy
//! 3. Paint it on its own page through a [`DocumentSink`]
//! 4. Serialize the finished document

mod decode;
mod io;

pub use decode::{DecodedImage, decode_record};
pub use io::{file_name_for, save_document};

use crate::collection::ImageRecord;
use crate::layout::compute_placement;
use crate::options::DocumentOptions;
use crate::render::{DocumentSink, PdfSink};
use crate::types::*;

/// A finished document ready for delivery
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    /// Suggested file name (`photo-to-pdf-<unix millis>.pdf`)
    pub file_name: String,
    /// Serialized PDF
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Compose `photos` into a PDF, one page per photo in order.
pub async fn compose(photos: &[ImageRecord], options: &DocumentOptions) -> Result<GeneratedDocument> {
    compose_with_progress(photos, options, |_, _| {}).await
}

/// Like [`compose`], reporting `(pages_done, total)` after each page.
pub async fn compose_with_progress(
    photos: &[ImageRecord],
    options: &DocumentOptions,
    progress: impl FnMut(usize, usize),
) -> Result<GeneratedDocument> {
    let sink = PdfSink::new(options.page_geometry());
    compose_into(photos, options, sink, progress).await
}

/// Compose `photos` into an arbitrary document sink.
///
/// Fails with [`PhotoPdfError::EmptyInput`] before touching the sink when
/// there is nothing to compose. Any failure drops the partial document.
pub async fn compose_into<S>(
    photos: &[ImageRecord],
    options: &DocumentOptions,
    mut sink: S,
    mut progress: impl FnMut(usize, usize),
) -> Result<GeneratedDocument>
where
    S: DocumentSink + Send + 'static,
{
    check_run(photos, options)?;

    let total = photos.len();
    let geometry = options.page_geometry();
    let quality = options.quality.scalar();

    log::info!(
        "Composing {} photo(s) on {} {:?} pages ({:?}, {:?} quality)",
        total,
        options.paper_size.name(),
        options.orientation,
        options.fit,
        options.quality
    );

    for (index, record) in photos.iter().enumerate() {
        let decoded = decode_record(record).await?;
        let placement = compute_placement(options.fit, decoded.dimensions(), &geometry);

        // The first photo goes on the sink's initial page
        if index > 0 {
            sink.add_page()?;
        }

        log::debug!(
            "Page {}/{}: '{}' {}x{} px at {:?}",
            index + 1,
            total,
            record.name(),
            decoded.width(),
            decoded.height(),
            placement
        );

        sink.paint_image(&decoded, &placement, quality)?;
        progress(index + 1, total);
    }

    let page_count = sink.page_count();
    let bytes = tokio::task::spawn_blocking(move || sink.finish()).await??;
    let file_name = file_name_for(chrono::Utc::now().timestamp_millis());

    log::info!("Generated {} ({} pages, {} bytes)", file_name, page_count, bytes.len());

    Ok(GeneratedDocument {
        file_name,
        bytes,
        page_count,
    })
}

fn check_run(photos: &[ImageRecord], options: &DocumentOptions) -> Result<()> {
    if photos.is_empty() {
        return Err(PhotoPdfError::EmptyInput);
    }
    options.validate()
}
