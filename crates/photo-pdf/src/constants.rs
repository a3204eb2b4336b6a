//! Shared constants for photo-to-PDF conversion

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Output Document
// =============================================================================

/// Prefix of generated document file names
pub const FILE_NAME_PREFIX: &str = "photo-to-pdf-";

/// Extension of generated document file names
pub const FILE_NAME_EXTENSION: &str = "pdf";

/// PDF header version written by the sink
pub const PDF_VERSION: &str = "1.5";

/// Value of the /Producer entry in the document info dictionary
pub const PRODUCER: &str = concat!("photo-pdf ", env!("CARGO_PKG_VERSION"));

/// Value of the /Title entry in the document info dictionary
pub const DOCUMENT_TITLE: &str = "Photos";

/// Resource name prefix for image XObjects (`/Im0`, `/Im1`, ...)
pub const IMAGE_RESOURCE_PREFIX: &str = "Im";
