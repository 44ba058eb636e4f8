/// Post-processing configuration for the face detector.
///
/// The defaults match the short-range `BlazeFace` model: a 128x128 input,
/// four feature-map layers, and six facial keypoints per box.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Minimum sigmoid score for a detection to be reported.
    pub score_threshold: f32,

    /// Scale dividing model input size into anchor units. Box and keypoint
    /// regressions are expressed in pixels of a square this many wide.
    pub coord_scale: f32,

    /// Number of keypoints regressed per box.
    pub num_keypoints: usize,

    /// Offset of the first keypoint coordinate within a regression row.
    /// The leading values are the box center and extents.
    pub keypoint_coord_offset: usize,

    /// Feature-map strides, one per output layer. Consecutive equal strides
    /// share a grid and stack their anchors per cell.
    pub strides: Vec<u32>,

    /// Anchor center offset within a grid cell, as a fraction of the cell.
    pub anchor_offset: f32,

    /// Anchors contributed by each layer to every cell of its grid.
    pub anchors_per_layer: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.40,
            coord_scale: 128.0,
            num_keypoints: 6,
            keypoint_coord_offset: 4,
            strides: vec![8, 16, 16, 16],
            anchor_offset: 0.5,
            anchors_per_layer: 2,
        }
    }
}

impl DetectorConfig {
    /// Sets the minimum score for reporting a detection.
    #[must_use]
    pub fn with_score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Regression row width: box coordinates followed by keypoint pairs.
    #[must_use]
    pub const fn values_per_anchor(&self) -> usize {
        self.keypoint_coord_offset + 2 * self.num_keypoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_row_width_is_sixteen() {
        let config = DetectorConfig::default();
        assert_eq!(config.values_per_anchor(), 16);
    }

    #[test]
    fn test_with_score_threshold() {
        let config = DetectorConfig::default().with_score_threshold(0.75);
        assert!((config.score_threshold - 0.75).abs() < f32::EPSILON);
        assert_eq!(config.strides, vec![8, 16, 16, 16]);
    }
}
