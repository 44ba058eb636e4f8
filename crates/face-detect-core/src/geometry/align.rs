//! Rotation alignment and region cropping.

// Allow common image math patterns
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use image::{imageops, Rgb, RgbImage};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};

use crate::domain::{ImageDimensions, RegionOfInterest};

/// Rotates `image` (or a cropped region of it) by `angle` radians onto a
/// `dst`-sized canvas.
///
/// With `roi = None` the whole image rotates about the canvas center
/// `(dst.width / 2, dst.height / 2)`. With `roi = Some` the region is first
/// cut out of `image`, zero-filling any part outside the image bounds, and
/// rotates about the crop's own center. In both cases content is laid onto
/// the canvas at its original scale: anything falling outside `dst` is
/// clipped and uncovered canvas stays black.
///
/// A positive angle moves content counter-clockwise in y-down image
/// coordinates; detection post-processing applies the matching inverse when
/// mapping detector output back.
#[must_use]
pub fn align_and_crop(
    image: &RgbImage,
    angle: f64,
    dst: ImageDimensions,
    roi: Option<&RegionOfInterest>,
) -> RgbImage {
    match roi {
        None => {
            let center = (dst.width as f32 / 2.0, dst.height as f32 / 2.0);
            rotate_onto_canvas(image, angle, center, dst)
        }
        Some(roi) => {
            let crop = crop_with_zero_fill(image, roi);
            let center = (
                roi.width().max(0) as f32 / 2.0,
                roi.height().max(0) as f32 / 2.0,
            );
            rotate_onto_canvas(&crop, angle, center, dst)
        }
    }
}

/// Cuts `roi` out of `image`, zero-filling any part of the region that
/// falls outside the image bounds.
fn crop_with_zero_fill(image: &RgbImage, roi: &RegionOfInterest) -> RgbImage {
    let crop_width = roi.width().max(0) as u32;
    let crop_height = roi.height().max(0) as u32;
    let mut crop = RgbImage::new(crop_width, crop_height);

    // Intersect the requested region with the image rectangle, then place
    // the valid part at its offset within the crop.
    let x0 = roi.x_min.max(0);
    let y0 = roi.y_min.max(0);
    let x1 = roi.x_max.min(image.width() as i32);
    let y1 = roi.y_max.min(image.height() as i32);

    if x1 > x0 && y1 > y0 {
        let valid = imageops::crop_imm(
            image,
            x0 as u32,
            y0 as u32,
            (x1 - x0) as u32,
            (y1 - y0) as u32,
        )
        .to_image();
        imageops::replace(
            &mut crop,
            &valid,
            i64::from(x0 - roi.x_min),
            i64::from(y0 - roi.y_min),
        );
    }

    crop
}

fn rotate_onto_canvas(
    image: &RgbImage,
    angle: f64,
    center: (f32, f32),
    dst: ImageDimensions,
) -> RgbImage {
    let mut canvas = RgbImage::new(dst.width, dst.height);
    if image.width() == 0 || image.height() == 0 {
        return canvas;
    }

    // imageproc's positive rotation runs clockwise in y-down coordinates;
    // the pipeline convention is counter-clockwise, hence the negation.
    let projection = Projection::translate(center.0, center.1)
        * Projection::rotate(-(angle as f32))
        * Projection::translate(-center.0, -center.1);
    warp_into(
        image,
        &projection,
        Interpolation::Bilinear,
        Rgb([0, 0, 0]),
        &mut canvas,
    );
    canvas
}
