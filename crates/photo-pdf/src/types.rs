use crate::collection::PhotoId;
use crate::constants::mm_to_pt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoPdfError {
    #[error("No photos to convert")]
    EmptyInput,
    #[error("Failed to decode image '{name}' ({id}): {source}")]
    ImageDecode {
        id: PhotoId,
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("Render error: {0}")]
    Render(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl PhotoPdfError {
    /// True for failures raised by the document library while painting or
    /// serializing.
    pub fn is_render_failure(&self) -> bool {
        matches!(self, PhotoPdfError::Render(_))
    }
}

pub type Result<T> = std::result::Result<T, PhotoPdfError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::Tabloid => "Tabloid",
            PaperSize::Custom { .. } => "Custom",
        }
    }

    /// Page geometry for this size with orientation applied
    pub fn geometry(self, orientation: Orientation) -> PageGeometry {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => PageGeometry::new(w, h),
            Orientation::Landscape => PageGeometry::new(h, w),
        }
    }
}

/// Width and height of one output page, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
}

impl PageGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width_pt(&self) -> f32 {
        mm_to_pt(self.width)
    }

    pub fn height_pt(&self) -> f32 {
        mm_to_pt(self.height)
    }
}

/// How an image is mapped onto the page area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitStrategy {
    /// Largest aspect-preserving size that fits, centered (letterboxed)
    #[default]
    Contain,
    /// Stretch to cover the whole page (aspect ratio ignored)
    Fill,
    /// Aspect-preserving min-scale-factor fit, centered
    Actual,
}

/// Output encoding quality, applied uniformly to every image in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QualityLevel {
    #[default]
    High,
    Medium,
    Low,
}

impl QualityLevel {
    /// Encoding quality scalar in (0, 1]
    pub fn scalar(self) -> f32 {
        match self {
            QualityLevel::High => 1.0,
            QualityLevel::Medium => 0.8,
            QualityLevel::Low => 0.6,
        }
    }

    /// JPEG encoder quality (1-100) for a quality scalar
    pub fn jpeg_quality(scalar: f32) -> u8 {
        (scalar * 100.0).round().clamp(1.0, 100.0) as u8
    }
}
