//! Document rendering
//!
//! The compositor talks to the document library through [`DocumentSink`].
//! [`PdfSink`] is the lopdf-backed implementation.

mod encode;
mod pdf;
mod sink;

pub use pdf::PdfSink;
pub use sink::DocumentSink;
