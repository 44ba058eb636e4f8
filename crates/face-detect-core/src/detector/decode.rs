use crate::domain::Point;

use super::anchors::Anchor;
use super::config::DetectorConfig;

/// A detection decoded into model-input pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DecodedDetection {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
    pub keypoints: Vec<Point>,
}

/// Decodes one regression row against its anchor.
///
/// The box center and every keypoint are offsets from the anchor center
/// scaled into input pixels; the box width and height are absolute pixel
/// extents and take no anchor term.
pub(crate) fn decode_detection(
    row: &[f32],
    anchor: Anchor,
    config: &DetectorConfig,
) -> DecodedDetection {
    let anchor_x = anchor.x * config.coord_scale;
    let anchor_y = anchor.y * config.coord_scale;

    let x_center = row[0] + anchor_x;
    let y_center = row[1] + anchor_y;
    let width = row[2];
    let height = row[3];

    let keypoints = (0..config.num_keypoints)
        .map(|k| {
            let offset = config.keypoint_coord_offset + 2 * k;
            Point::new(row[offset] + anchor_x, row[offset + 1] + anchor_y)
        })
        .collect();

    DecodedDetection {
        x_min: x_center - width / 2.0,
        y_min: y_center - height / 2.0,
        x_max: x_center + width / 2.0,
        y_max: y_center + height / 2.0,
        keypoints,
    }
}
