//! ONNX Runtime inference engine adapter.

use anyhow::{Context, Result};
use ndarray::Array4;
use ort::{inputs, GraphOptimizationLevel, Session, ValueType};
use std::path::Path;
use tracing::{debug, warn};

use face_detect_core::domain::ImageDimensions;
use face_detect_core::ports::{InferenceEngine, RawDetectionOutput};

/// Output tensor carrying the per-anchor regression rows.
const REGRESSORS_OUTPUT: &str = "regressors";
/// Output tensor carrying the per-anchor classifier logits.
const CLASSIFICATORS_OUTPUT: &str = "classificators";

/// Engine build options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Intra-op thread count for the session.
    pub thread_count: usize,

    /// Request hardware-accelerated execution. Execution providers are
    /// compile-time features of the runtime; when none is built in the
    /// engine warns and falls back to CPU.
    pub use_accelerator: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            thread_count: 2,
            use_accelerator: false,
        }
    }
}

impl EngineOptions {
    /// Sets the intra-op thread count.
    #[must_use]
    pub fn with_thread_count(mut self, threads: usize) -> Self {
        self.thread_count = threads;
        self
    }

    /// Requests hardware-accelerated execution.
    #[must_use]
    pub fn with_accelerator(mut self, enabled: bool) -> Self {
        self.use_accelerator = enabled;
        self
    }
}

/// ONNX Runtime session wrapped as an [`InferenceEngine`].
///
/// The session is validated at construction: the input must be a fixed-size
/// NHWC tensor and both detector outputs are resolved by name up front.
/// Inference after a successful build can only fail on invocation itself.
pub struct OrtEngine {
    session: Session,
    input_name: String,
    regressors_name: String,
    classificators_name: String,
    input_size: ImageDimensions,
}

impl OrtEngine {
    /// Builds an engine from in-memory model bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be parsed or built, or if its
    /// input/output signature does not match the detector layout.
    pub fn from_bytes(model_bytes: &[u8], options: &EngineOptions) -> Result<Self> {
        let session = Self::builder(options)?
            .commit_from_memory(model_bytes)
            .context("Failed to build model from bytes")?;
        Self::from_session(session)
    }

    /// Builds an engine from a model file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the model cannot be
    /// built, or if its input/output signature does not match the detector
    /// layout.
    pub fn from_file(path: impl AsRef<Path>, options: &EngineOptions) -> Result<Self> {
        let path = path.as_ref();
        let session = Self::builder(options)?
            .commit_from_file(path)
            .with_context(|| format!("Failed to build model from {}", path.display()))?;
        Self::from_session(session)
    }

    fn builder(options: &EngineOptions) -> Result<ort::SessionBuilder> {
        if options.use_accelerator {
            warn!("No execution provider compiled in; running on CPU");
        }
        Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(options.thread_count)
            .context("Failed to configure session")
    }

    fn from_session(session: Session) -> Result<Self> {
        let input_info = session.inputs.first().context("Model has no inputs")?;
        let input_name = input_info.name.clone();
        let dims = match &input_info.input_type {
            ValueType::Tensor { dimensions, .. } => dimensions.clone(),
            other => anyhow::bail!("Unsupported model input type: {other:?}"),
        };
        anyhow::ensure!(
            dims.len() == 4,
            "Expected NHWC model input, got {} dimensions",
            dims.len()
        );
        let height = u32::try_from(dims[1])
            .ok()
            .filter(|&h| h > 0)
            .context("Model input height is not a fixed positive size")?;
        let width = u32::try_from(dims[2])
            .ok()
            .filter(|&w| w > 0)
            .context("Model input width is not a fixed positive size")?;
        anyhow::ensure!(dims[3] == 3, "Expected 3-channel model input");

        // Resolve the two detector outputs once; inference retrieves them
        // through the stored keys and never searches names again.
        let regressors_name = resolve_output(&session, REGRESSORS_OUTPUT)?;
        let classificators_name = resolve_output(&session, CLASSIFICATORS_OUTPUT)?;

        debug!(
            "Detection model ready: input '{}' {}x{}, {} outputs",
            input_name,
            width,
            height,
            session.outputs.len()
        );

        Ok(Self {
            session,
            input_name,
            regressors_name,
            classificators_name,
            input_size: ImageDimensions::new(width, height),
        })
    }
}

fn resolve_output(session: &Session, name: &str) -> Result<String> {
    session
        .outputs
        .iter()
        .find(|output| output.name == name)
        .map(|output| output.name.clone())
        .with_context(|| format!("Model output '{name}' not found"))
}

impl InferenceEngine for OrtEngine {
    fn input_size(&self) -> ImageDimensions {
        self.input_size
    }

    fn infer(&mut self, input: &[f32]) -> Result<RawDetectionOutput> {
        let height = self.input_size.height as usize;
        let width = self.input_size.width as usize;
        let tensor = Array4::from_shape_vec((1, height, width, 3), input.to_vec())
            .context("Input length does not match model input shape")?;

        let outputs = self
            .session
            .run(inputs![self.input_name.as_str() => tensor.view()]?)
            .context("Model invocation failed")?;

        let regressors = outputs[self.regressors_name.as_str()]
            .try_extract_tensor::<f32>()
            .context("Failed to read regressors output")?
            .iter()
            .copied()
            .collect();
        let scores = outputs[self.classificators_name.as_str()]
            .try_extract_tensor::<f32>()
            .context("Failed to read classificators output")?
            .iter()
            .copied()
            .collect();

        Ok(RawDetectionOutput { regressors, scores })
    }
}
