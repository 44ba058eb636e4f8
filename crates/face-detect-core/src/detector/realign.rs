#![allow(clippy::cast_possible_truncation)]

use crate::domain::{Point, RegionOfInterest};
use crate::geometry::CanvasMapping;

use super::decode::DecodedDetection;

/// Maps a decoded detection from the model canvas back to the original
/// image.
///
/// Coordinates rotate by `rotation` about the canvas rotation center,
/// undoing the alignment applied before inference, then lose the letterbox
/// padding and divide by the resize ratio. The region is rounded half away
/// from zero to integers; keypoints keep fractional positions. Box corners
/// pass through `f32` before the ratio division while keypoints stay in
/// `f64` until the end.
pub(crate) fn realign_detection(
    detection: &DecodedDetection,
    rotation: f64,
    mapping: &CanvasMapping,
) -> (RegionOfInterest, Vec<Point>) {
    let (anchor_x, anchor_y) = mapping.rotation_center;
    let (sin, cos) = rotation.sin_cos();
    let pad_x = f64::from(mapping.pad_left);
    let pad_y = f64::from(mapping.pad_top);

    let center_x = (detection.x_min + detection.x_max) / 2.0;
    let center_y = (detection.y_min + detection.y_max) / 2.0;
    let half_width = center_x - detection.x_min;
    let half_height = center_y - detection.y_min;

    let x = f64::from(center_x) - anchor_x;
    let y = f64::from(center_y) - anchor_y;
    let new_center_x = (x * cos - y * sin + anchor_x - pad_x) as f32;
    let new_center_y = (x * sin + y * cos + anchor_y - pad_y) as f32;

    let corners = [
        new_center_x - half_width,
        new_center_y - half_height,
        new_center_x + half_width,
        new_center_y + half_height,
    ];
    let [x_min, y_min, x_max, y_max] =
        corners.map(|corner| (f64::from(corner) / mapping.resize_ratio).round() as i32);
    let region = RegionOfInterest::new(x_min, y_min, x_max, y_max);

    let keypoints = detection
        .keypoints
        .iter()
        .map(|keypoint| {
            let x = f64::from(keypoint.x) - anchor_x;
            let y = f64::from(keypoint.y) - anchor_y;
            Point::new(
                ((x * cos - y * sin + anchor_x - pad_x) / mapping.resize_ratio) as f32,
                ((x * sin + y * cos + anchor_y - pad_y) / mapping.resize_ratio) as f32,
            )
        })
        .collect();

    (region, keypoints)
}
