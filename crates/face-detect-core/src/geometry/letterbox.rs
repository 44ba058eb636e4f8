//! Aspect-preserving resize onto a fixed-size canvas.

// Allow common image math patterns
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use image::{imageops, imageops::FilterType, RgbImage};

use crate::domain::{ImageDimensions, Point};

/// How a source image was mapped onto the detector's input canvas.
///
/// One value is produced per letterbox pass and threaded through to
/// post-processing, which inverts the mapping to express detector output in
/// source-image coordinates. Keeping this per-call (instead of as detector
/// state) makes a detection pass self-contained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapping {
    /// Uniform scale factor from source pixels to canvas pixels.
    pub resize_ratio: f64,
    /// Zero-padding added left of the scaled image.
    pub pad_left: u32,
    /// Zero-padding added above the scaled image.
    pub pad_top: u32,
    /// Center of the canvas, the pivot used when the canvas is rotated.
    pub rotation_center: (f64, f64),
}

impl CanvasMapping {
    /// Maps a source-image point forward onto the canvas:
    /// `(x * resize_ratio + pad_left, y * resize_ratio + pad_top)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_canvas(&self, point: Point) -> Point {
        Point::new(
            (f64::from(point.x) * self.resize_ratio + f64::from(self.pad_left)) as f32,
            (f64::from(point.y) * self.resize_ratio + f64::from(self.pad_top)) as f32,
        )
    }
}

/// Scales `image` uniformly to fit inside `target` and pads the remainder
/// with black, returning the padded canvas and the applied mapping.
///
/// The scale is chosen by whichever aspect ratio is larger: images wider
/// than the target (relatively) fill the target width, taller images fill
/// the target height, so neither scaled dimension ever exceeds the target.
/// Left/top padding take half the deficit (integer division); right/bottom
/// absorb the odd remainder. The image must be non-empty.
#[must_use]
pub fn resize_with_letterbox(
    image: &RgbImage,
    target: ImageDimensions,
) -> (RgbImage, CanvasMapping) {
    let (width, height) = image.dimensions();
    let target_ratio = f64::from(target.width) / f64::from(target.height);
    let input_ratio = f64::from(width) / f64::from(height);

    let (scaled_width, scaled_height, resize_ratio) = if input_ratio >= target_ratio {
        let scaled_width = target.width;
        let scaled_height = (f64::from(scaled_width) / input_ratio) as u32;
        let resize_ratio = f64::from(target.width) / f64::from(width);
        (scaled_width, scaled_height, resize_ratio)
    } else {
        let scaled_height = target.height;
        let scaled_width = (f64::from(scaled_height) * input_ratio) as u32;
        let resize_ratio = f64::from(target.height) / f64::from(height);
        (scaled_width, scaled_height, resize_ratio)
    };

    let resized = imageops::resize(image, scaled_width, scaled_height, FilterType::Triangle);

    let pad_left = target.width.saturating_sub(scaled_width) / 2;
    let pad_top = target.height.saturating_sub(scaled_height) / 2;

    let mut canvas = RgbImage::new(target.width, target.height);
    imageops::replace(&mut canvas, &resized, i64::from(pad_left), i64::from(pad_top));

    let mapping = CanvasMapping {
        resize_ratio,
        pad_left,
        pad_top,
        rotation_center: (f64::from(target.width) / 2.0, f64::from(target.height) / 2.0),
    };
    (canvas, mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn white(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
    }

    fn letterbox(image: &RgbImage, width: u32, height: u32) -> (RgbImage, CanvasMapping) {
        resize_with_letterbox(image, ImageDimensions::new(width, height))
    }

    #[test]
    fn test_landscape_fits_width() {
        let (canvas, mapping) = letterbox(&white(64, 48), 128, 128);

        assert!((mapping.resize_ratio - 2.0).abs() < 1e-12);
        assert_eq!(mapping.pad_left, 0);
        assert_eq!(mapping.pad_top, 16);
        assert_eq!(canvas.dimensions(), (128, 128));

        // Bands above and below the scaled content are zero padding.
        assert_eq!(canvas.get_pixel(64, 0).0, [0, 0, 0]);
        assert_eq!(canvas.get_pixel(64, 127).0, [0, 0, 0]);
        assert_eq!(canvas.get_pixel(64, 64).0, [255, 255, 255]);
    }

    #[test]
    fn test_portrait_fits_height() {
        let (canvas, mapping) = letterbox(&white(48, 64), 128, 128);

        assert!((mapping.resize_ratio - 2.0).abs() < 1e-12);
        assert_eq!(mapping.pad_left, 16);
        assert_eq!(mapping.pad_top, 0);

        assert_eq!(canvas.get_pixel(0, 64).0, [0, 0, 0]);
        assert_eq!(canvas.get_pixel(127, 64).0, [0, 0, 0]);
        assert_eq!(canvas.get_pixel(64, 64).0, [255, 255, 255]);
    }

    #[test]
    fn test_exact_fit_has_no_padding() {
        let (canvas, mapping) = letterbox(&white(128, 128), 128, 128);

        assert!((mapping.resize_ratio - 1.0).abs() < 1e-12);
        assert_eq!(mapping.pad_left, 0);
        assert_eq!(mapping.pad_top, 0);
        assert_eq!(canvas.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(canvas.get_pixel(127, 127).0, [255, 255, 255]);
    }

    #[test]
    fn test_odd_deficit_pads_extra_on_far_side() {
        // 60x25 against 128x128: scaled height truncates to 53, leaving an
        // odd deficit of 75 split as 37 above, 38 below.
        let (canvas, mapping) = letterbox(&white(60, 25), 128, 128);

        assert_eq!(mapping.pad_top, 37);
        assert_eq!(canvas.get_pixel(64, 36).0, [0, 0, 0]);
        assert_eq!(canvas.get_pixel(64, 37).0, [255, 255, 255]);
        assert_eq!(canvas.get_pixel(64, 89).0, [255, 255, 255]);
        assert_eq!(canvas.get_pixel(64, 90).0, [0, 0, 0]);
    }

    #[test]
    fn test_rotation_center_is_canvas_center() {
        let (_, mapping) = letterbox(&white(64, 48), 128, 96);
        assert!((mapping.rotation_center.0 - 64.0).abs() < 1e-12);
        assert!((mapping.rotation_center.1 - 48.0).abs() < 1e-12);
    }

    #[test]
    fn test_forward_mapping() {
        let (_, mapping) = letterbox(&white(64, 48), 128, 128);
        let mapped = mapping.to_canvas(Point::new(10.0, 20.0));
        assert!((mapped.x - 20.0).abs() < 1e-5);
        assert!((mapped.y - 56.0).abs() < 1e-5);
    }
}
