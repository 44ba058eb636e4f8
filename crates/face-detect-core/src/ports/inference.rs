//! Inference engine port.
//!
//! The neural network is a black box to this crate: an engine loads a model,
//! accepts a normalized input tensor, and hands back the detector's two raw
//! output buffers. Everything model-runtime-specific (graph building, tensor
//! allocation, delegates) lives behind this trait in an adapter crate.

use crate::domain::ImageDimensions;

/// Raw output of one detector inference.
///
/// `regressors` holds one fixed-width row per anchor (box coordinates
/// followed by interleaved keypoint coordinates); `scores` holds one raw
/// logit per anchor. Row order matches the anchor table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDetectionOutput {
    /// Flat regression buffer, `anchor_count * values_per_anchor` floats.
    pub regressors: Vec<f32>,
    /// Flat classification buffer, one logit per anchor.
    pub scores: Vec<f32>,
}

/// Port for a built, ready-to-invoke detection model.
///
/// Implementations are constructed from model bytes before the orchestrator
/// ever sees them, so an engine handed to [`crate::detector::FaceDetector`]
/// is always in a ready state. Invocation failures are fatal to the call and
/// propagate as errors; no retry is attempted.
pub trait InferenceEngine: Send {
    /// Dimensions of the model's fixed-size input tensor.
    fn input_size(&self) -> ImageDimensions;

    /// Runs the network on a normalized NHWC float input of
    /// `input_size().height * input_size().width * 3` values.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying engine fails to invoke or its
    /// outputs cannot be read.
    fn infer(&mut self, input: &[f32]) -> anyhow::Result<RawDetectionOutput>;
}
