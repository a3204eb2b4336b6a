//! Image placement within a page
//!
//! Each fit strategy maps an image's intrinsic pixel size onto the page:
//! - Contain: letterboxed by comparing aspect ratios, centered
//! - Fill: stretched over the whole page
//! - Actual: scaled by the smaller of the two axis factors, centered
//!
//! Contain and Actual usually produce the same box but are derived
//! differently and can disagree in the last bits of a float. Both formulas
//! are kept as they are. The arithmetic runs in `f64` and is narrowed to the
//! `f32` page units of [`Rect`] only at the end.

use crate::types::{FitStrategy, PageGeometry};

use super::Rect;

/// Compute where an image of `image_px` pixels is drawn on `page`.
///
/// The result is in page units with a top-left origin.
pub fn compute_placement(strategy: FitStrategy, image_px: (u32, u32), page: &PageGeometry) -> Rect {
    let (img_w, img_h) = (f64::from(image_px.0), f64::from(image_px.1));
    let (page_w, page_h) = (f64::from(page.width), f64::from(page.height));

    match strategy {
        FitStrategy::Contain => {
            let img_ratio = img_w / img_h;
            let page_ratio = page_w / page_h;

            let (draw_w, draw_h) = if img_ratio > page_ratio {
                // Relatively wider than the page: width-limited
                (page_w, page_w / img_ratio)
            } else {
                (page_h * img_ratio, page_h)
            };

            centered(draw_w, draw_h, page_w, page_h)
        }
        FitStrategy::Fill => Rect::new(0.0, 0.0, page.width, page.height),
        FitStrategy::Actual => {
            let scale = (page_w / img_w).min(page_h / img_h);
            centered(img_w * scale, img_h * scale, page_w, page_h)
        }
    }
}

fn centered(draw_w: f64, draw_h: f64, page_w: f64, page_h: f64) -> Rect {
    Rect::new(
        ((page_w - draw_w) / 2.0) as f32,
        ((page_h - draw_h) / 2.0) as f32,
        draw_w as f32,
        draw_h as f32,
    )
}
