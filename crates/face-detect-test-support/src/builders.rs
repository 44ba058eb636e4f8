//! Synthetic data builders for testing.

use face_detect_core::ports::RawDetectionOutput;
use image::{Rgb, RgbImage};

/// Suppressed logit for non-winning anchors; its sigmoid is far below any
/// realistic score threshold.
const SUPPRESSED_LOGIT: f32 = -10.0;

/// Builder for raw detector outputs.
///
/// Starts from a fully suppressed output (every logit low, every regression
/// value zero) and lets tests raise individual anchors.
pub struct RawOutputBuilder {
    values_per_anchor: usize,
    regressors: Vec<f32>,
    scores: Vec<f32>,
}

impl RawOutputBuilder {
    /// Creates a builder for `anchor_count` anchors with rows of
    /// `values_per_anchor` regression values.
    #[must_use]
    pub fn new(anchor_count: usize, values_per_anchor: usize) -> Self {
        Self {
            values_per_anchor,
            regressors: vec![0.0; anchor_count * values_per_anchor],
            scores: vec![SUPPRESSED_LOGIT; anchor_count],
        }
    }

    /// Creates a builder sized for the default `BlazeFace` layout:
    /// 896 anchors with 16-value rows.
    #[must_use]
    pub fn blazeface() -> Self {
        Self::new(896, 16)
    }

    /// Sets the classifier logit for one anchor.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` is out of range.
    #[must_use]
    pub fn with_score(mut self, anchor: usize, logit: f32) -> Self {
        self.scores[anchor] = logit;
        self
    }

    /// Sets the leading regression values for one anchor.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` is out of range or `row` is wider than a row.
    #[must_use]
    pub fn with_row(mut self, anchor: usize, row: &[f32]) -> Self {
        assert!(row.len() <= self.values_per_anchor);
        let start = anchor * self.values_per_anchor;
        self.regressors[start..start + row.len()].copy_from_slice(row);
        self
    }

    /// Finalizes the raw output.
    #[must_use]
    pub fn build(self) -> RawDetectionOutput {
        RawDetectionOutput {
            regressors: self.regressors,
            scores: self.scores,
        }
    }
}

/// Builder for creating synthetic test images.
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    /// Creates a solid-color RGB image.
    #[must_use]
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(rgb))
    }

    /// Creates a black image with a single white pixel at `(x, y)`.
    ///
    /// Useful for tracking where a location ends up after a geometric
    /// transform.
    #[must_use]
    pub fn marked(width: u32, height: u32, x: u32, y: u32) -> RgbImage {
        let mut image = RgbImage::new(width, height);
        image.put_pixel(x, y, Rgb([255, 255, 255]));
        image
    }

    /// Creates a zero-sized image.
    #[must_use]
    pub fn empty() -> RgbImage {
        RgbImage::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_output_dimensions() {
        let output = RawOutputBuilder::blazeface().build();
        assert_eq!(output.scores.len(), 896);
        assert_eq!(output.regressors.len(), 896 * 16);
    }

    #[test]
    fn test_default_scores_are_suppressed() {
        let output = RawOutputBuilder::new(4, 16).build();
        assert!(output.scores.iter().all(|&s| s == SUPPRESSED_LOGIT));
        assert!(output.regressors.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_with_score_and_row_target_one_anchor() {
        let output = RawOutputBuilder::new(4, 16)
            .with_score(2, 1.5)
            .with_row(2, &[10.0, 20.0, 4.0, 6.0])
            .build();

        assert_eq!(output.scores[2], 1.5);
        assert_eq!(output.scores[1], SUPPRESSED_LOGIT);
        assert_eq!(output.regressors[2 * 16], 10.0);
        assert_eq!(output.regressors[2 * 16 + 3], 6.0);
        assert_eq!(output.regressors[16], 0.0);
    }

    #[test]
    fn test_marked_image() {
        let image = SyntheticImageBuilder::marked(8, 8, 5, 3);
        assert_eq!(image.get_pixel(5, 3).0, [255, 255, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_empty_image() {
        let image = SyntheticImageBuilder::empty();
        assert_eq!(image.dimensions(), (0, 0));
    }
}
