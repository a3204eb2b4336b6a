//! Asynchronous image decoding

use crate::collection::ImageRecord;
use crate::types::*;
use image::{DynamicImage, GenericImageView};

/// A fully decoded image, ready to be painted
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
}

impl DecodedImage {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Intrinsic pixel dimensions (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

/// Decode a record's payload off the async runtime.
pub async fn decode_record(record: &ImageRecord) -> Result<DecodedImage> {
    let data = record.shared_data();
    let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&data)).await?;

    match decoded {
        Ok(image) if image.width() > 0 && image.height() > 0 => Ok(DecodedImage::new(image)),
        Ok(_) => Err(PhotoPdfError::ImageDecode {
            id: record.id(),
            name: record.name().to_string(),
            source: image::ImageError::Limits(image::error::LimitError::from_kind(
                image::error::LimitErrorKind::DimensionError,
            )),
        }),
        Err(source) => Err(PhotoPdfError::ImageDecode {
            id: record.id(),
            name: record.name().to_string(),
            source,
        }),
    }
}
