#![allow(clippy::cast_precision_loss)]

use crate::domain::ImageDimensions;

use super::config::DetectorConfig;

/// Anchor box center in normalized `[0, 1]` coordinates of the model input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

/// Generates the anchor grid for `input` according to the stride schedule.
///
/// Layers with equal consecutive strides share one feature map and stack
/// their anchors on every cell, so the default schedule `[8, 16, 16, 16]`
/// on a 128x128 input yields a 16x16 grid with 2 anchors per cell followed
/// by an 8x8 grid with 6, 896 anchors total. Anchors are emitted row-major
/// per grid, matching the order of the model's regression rows.
#[must_use]
pub fn generate_anchors(config: &DetectorConfig, input: ImageDimensions) -> Vec<Anchor> {
    let mut anchors = Vec::new();

    let mut layer = 0;
    while layer < config.strides.len() {
        // Collapse the run of layers sharing this stride into one grid.
        let mut anchors_per_cell = 0;
        let mut last_same_stride = layer;
        while last_same_stride < config.strides.len()
            && config.strides[last_same_stride] == config.strides[layer]
        {
            anchors_per_cell += config.anchors_per_layer;
            last_same_stride += 1;
        }

        let stride = config.strides[layer];
        let grid_width = input.width / stride;
        let grid_height = input.height / stride;
        for y in 0..grid_height {
            for x in 0..grid_width {
                for _ in 0..anchors_per_cell {
                    anchors.push(Anchor {
                        x: (x as f32 + config.anchor_offset) / grid_width as f32,
                        y: (y as f32 + config.anchor_offset) / grid_height as f32,
                    });
                }
            }
        }

        layer = last_same_stride;
    }

    anchors
}
