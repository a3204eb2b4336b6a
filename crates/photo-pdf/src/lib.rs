mod collection;
pub mod compose;
mod constants;
pub mod layout;
mod options;
pub mod render;
mod session;
mod types;

pub use collection::*;
pub use compose::{
    DecodedImage, GeneratedDocument, compose, compose_into, compose_with_progress, file_name_for,
    save_document,
};
pub use constants::{POINTS_PER_MM, mm_to_pt, pt_to_mm};
pub use layout::{Rect, compute_placement};
pub use options::*;
pub use render::{DocumentSink, PdfSink};
pub use session::Session;
pub use types::*;
