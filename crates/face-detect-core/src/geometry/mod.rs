//! Image-plane transforms: letterbox resize, rotation alignment, and
//! pixel normalization.

mod align;
mod letterbox;
mod normalize;

pub use align::align_and_crop;
pub use letterbox::{resize_with_letterbox, CanvasMapping};
pub use normalize::normalize_pixels;
