//! Single-face detection pipeline: preprocessing, inference dispatch, and
//! decoding of the raw network output back into image coordinates.

mod anchors;
mod config;
mod decode;
mod realign;

pub use anchors::{generate_anchors, Anchor};
pub use config::DetectorConfig;

use anyhow::{Context, Result};
use image::RgbImage;
use tracing::debug;

use crate::domain::{FaceDetection, FaceLocation, ImageDimensions};
use crate::geometry::{align_and_crop, normalize_pixels, resize_with_letterbox, CanvasMapping};
use crate::ports::{InferenceEngine, RawDetectionOutput};

use decode::decode_detection;
use realign::realign_detection;

/// Logistic squashing of a raw classifier logit.
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Single-face detector wrapping an inference engine.
///
/// The detector owns its engine and drives one inference at a time, which
/// is why the detection methods take `&mut self`. Preprocessing letterboxes
/// the image onto the engine's input canvas and rotates it by the caller's
/// prior angle; postprocessing decodes the best-scoring anchor and maps it
/// back through the inverse of both transforms.
pub struct FaceDetector<E> {
    engine: E,
    config: DetectorConfig,
    input_size: ImageDimensions,
    anchors: Vec<Anchor>,
}

impl<E: InferenceEngine> FaceDetector<E> {
    /// Creates a detector with the default `BlazeFace` configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable.
    pub fn new(engine: E) -> Result<Self> {
        Self::with_config(engine, DetectorConfig::default())
    }

    /// Creates a detector with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration yields no anchors or fewer
    /// than the two keypoints the eye landmarks require.
    pub fn with_config(engine: E, config: DetectorConfig) -> Result<Self> {
        anyhow::ensure!(
            config.num_keypoints >= 2,
            "Need at least 2 keypoints for eye landmarks, configured {}",
            config.num_keypoints
        );

        let input_size = engine.input_size();
        let anchors = generate_anchors(&config, input_size);
        anyhow::ensure!(!anchors.is_empty(), "Stride schedule produced no anchors");

        debug!(
            "Face detector ready: {}x{} input, {} anchors",
            input_size.width,
            input_size.height,
            anchors.len()
        );

        Ok(Self {
            engine,
            config,
            input_size,
            anchors,
        })
    }

    /// Detects the most prominent face and its in-plane rotation.
    ///
    /// `prior_angle` is a rotation in radians already known to level the
    /// face; the image is rotated by it before inference and the result is
    /// mapped back to the unrotated image. The returned angle is measured
    /// from the eye landmarks and can seed the next call.
    ///
    /// Returns `None` for an empty image (without invoking the engine) and
    /// when no candidate reaches the score threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails or its output has unexpected
    /// shape.
    pub fn detect(&mut self, image: &RgbImage, prior_angle: f64) -> Result<Option<FaceLocation>> {
        let Some(detection) = self.detect_face(image, prior_angle)? else {
            return Ok(None);
        };

        let angle = detection
            .face_angle()
            .context("Detection is missing eye keypoints")?;
        Ok(Some(FaceLocation {
            region: detection.region,
            angle,
        }))
    }

    /// Detects the most prominent face, returning its score and keypoints
    /// alongside the region.
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails or its output has unexpected
    /// shape.
    pub fn detect_face(
        &mut self,
        image: &RgbImage,
        prior_angle: f64,
    ) -> Result<Option<FaceDetection>> {
        if image.width() == 0 || image.height() == 0 {
            return Ok(None);
        }

        let (resized, mapping) = resize_with_letterbox(image, self.input_size);
        let aligned = align_and_crop(&resized, prior_angle, self.input_size, None);
        let input = normalize_pixels(&aligned);

        let raw = self.engine.infer(&input).context("Inference failed")?;
        self.postprocess(&raw, prior_angle, &mapping)
    }

    fn postprocess(
        &self,
        raw: &RawDetectionOutput,
        prior_angle: f64,
        mapping: &CanvasMapping,
    ) -> Result<Option<FaceDetection>> {
        anyhow::ensure!(
            raw.scores.len() == self.anchors.len(),
            "Expected {} classifier scores, got {}",
            self.anchors.len(),
            raw.scores.len()
        );
        let row_width = self.config.values_per_anchor();
        anyhow::ensure!(
            raw.regressors.len() == self.anchors.len() * row_width,
            "Expected {} regression values, got {}",
            self.anchors.len() * row_width,
            raw.regressors.len()
        );

        // Single-face model: only the best-scoring anchor is decoded. Ties
        // keep the earliest anchor.
        let mut best = 0;
        for (index, &logit) in raw.scores.iter().enumerate().skip(1) {
            if logit > raw.scores[best] {
                best = index;
            }
        }

        let score = sigmoid(raw.scores[best]);
        if score < self.config.score_threshold {
            debug!("Face score under threshold: {:.3}", score);
            return Ok(None);
        }

        let row = &raw.regressors[best * row_width..(best + 1) * row_width];
        let decoded = decode_detection(row, self.anchors[best], &self.config);
        let (region, keypoints) = realign_detection(&decoded, prior_angle, mapping);

        Ok(Some(FaceDetection {
            region,
            score,
            keypoints,
        }))
    }
}
