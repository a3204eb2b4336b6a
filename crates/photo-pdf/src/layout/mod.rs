//! Layout calculation for photo pages
//!
//! Pure geometry: given image pixel dimensions, a page size and a fit
//! strategy, compute where the image goes. Nothing here touches the
//! document library.

mod placement;
mod types;

pub use placement::*;
pub use types::*;
