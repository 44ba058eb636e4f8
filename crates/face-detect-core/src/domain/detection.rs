//! Detection result types.

use serde::{Deserialize, Serialize};

use super::{Point, RegionOfInterest};

/// A detected face with bounding region, confidence, and keypoints.
///
/// Keypoint order follows the detector's output layout: index 0 = right
/// eye, 1 = left eye, 2 = nose tip, 3 = mouth, 4 = right ear, 5 = left ear
/// ("right"/"left" from the perspective of the depicted person). All
/// coordinates are in original-image pixel space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceDetection {
    /// Bounding region in original-image pixels.
    pub region: RegionOfInterest,
    /// Sigmoid-activated confidence in `[0, 1]`.
    pub score: f32,
    /// Facial keypoints, in the same coordinate space as `region`.
    pub keypoints: Vec<Point>,
}

impl FaceDetection {
    /// Returns the right eye keypoint, if present.
    #[must_use]
    pub fn right_eye(&self) -> Option<Point> {
        self.keypoints.first().copied()
    }

    /// Returns the left eye keypoint, if present.
    #[must_use]
    pub fn left_eye(&self) -> Option<Point> {
        self.keypoints.get(1).copied()
    }

    /// In-plane rotation of the face derived from the eye keypoints:
    /// `atan2(left_eye.y - right_eye.y, left_eye.x - right_eye.x)`.
    ///
    /// Returns `None` if the detection carries fewer than two keypoints.
    #[must_use]
    pub fn face_angle(&self) -> Option<f64> {
        let right = self.right_eye()?;
        let left = self.left_eye()?;
        Some(f64::from(left.y - right.y).atan2(f64::from(left.x - right.x)))
    }
}

/// The region and in-plane rotation of a located face.
///
/// This is the public product of a detection pass; the angle feeds the next
/// frame's prior rotation in a tracking loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceLocation {
    /// Bounding region in original-image pixels.
    pub region: RegionOfInterest,
    /// In-plane face rotation in radians.
    pub angle: f64,
}
