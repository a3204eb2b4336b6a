use crate::compose::DecodedImage;
use crate::layout::Rect;
use crate::types::Result;

/// A multi-page document under construction.
///
/// A sink starts with one empty initial page. Placements are in page units
/// (millimetres) with a top-left origin; converting to the output format's
/// coordinate system is the sink's job.
pub trait DocumentSink {
    /// Append a new page and make it current
    fn add_page(&mut self) -> Result<()>;

    /// Paint `image` into `placement` on the current page.
    ///
    /// `quality` is the encoding quality scalar in (0, 1].
    fn paint_image(&mut self, image: &DecodedImage, placement: &Rect, quality: f32) -> Result<()>;

    /// Number of pages, including the current one
    fn page_count(&self) -> usize;

    /// Serialize the finished document
    fn finish(self) -> Result<Vec<u8>>
    where
        Self: Sized;
}
