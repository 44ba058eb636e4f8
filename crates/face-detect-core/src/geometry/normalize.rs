use image::RgbImage;

/// Converts an RGB image to the `[-1, 1]` float range expected by the
/// detection model, in interleaved row-major (NHWC) order.
#[must_use]
pub fn normalize_pixels(image: &RgbImage) -> Vec<f32> {
    image
        .as_raw()
        .iter()
        .map(|&v| f32::from(v) / 127.5 - 1.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_range_endpoints() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([0, 128, 255]));

        let values = normalize_pixels(&image);
        assert!((values[0] - -1.0).abs() < 1e-6);
        assert!((values[1] - 0.003_921_6).abs() < 1e-6);
        assert!((values[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_interleaved_row_major_order() {
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 255, 0]));
        image.put_pixel(0, 1, Rgb([0, 0, 255]));

        let values = normalize_pixels(&image);
        assert_eq!(values.len(), 2 * 2 * 3);
        // Pixel (0,0): R channel high.
        assert!(values[0] > 0.99);
        // Pixel (1,0) follows in the same row: G channel high.
        assert!(values[4] > 0.99);
        // Pixel (0,1) starts the second row: B channel high.
        assert!(values[8] > 0.99);
    }
}
