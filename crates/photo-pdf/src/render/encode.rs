//! JPEG encoding of decoded images for embedding

use crate::types::{PhotoPdfError, QualityLevel, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage};

/// A baseline JPEG ready to be embedded with /DCTDecode
pub(crate) struct EncodedJpeg {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub color_space: &'static str,
}

/// Encode `image` as JPEG at the quality scalar `quality`.
///
/// Grayscale images stay single-channel. Everything else becomes RGB; alpha
/// is dropped.
pub(crate) fn encode_jpeg(image: &DynamicImage, quality: f32) -> Result<EncodedJpeg> {
    let jpeg_quality = QualityLevel::jpeg_quality(quality);
    let mut data = Vec::new();

    let color_space = {
        let mut encoder = JpegEncoder::new_with_quality(&mut data, jpeg_quality);
        match image.color() {
            ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => {
                encoder.encode_image(&image.to_luma8()).map_err(encode_error)?;
                "DeviceGray"
            }
            _ => {
                encoder.encode_image(&image.to_rgb8()).map_err(encode_error)?;
                "DeviceRGB"
            }
        }
    };

    Ok(EncodedJpeg {
        data,
        width: image.width(),
        height: image.height(),
        color_space,
    })
}

fn encode_error(e: image::ImageError) -> PhotoPdfError {
    PhotoPdfError::Render(format!("JPEG encoding failed: {e}"))
}
