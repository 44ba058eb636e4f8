//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use face_detect_core::domain::ImageDimensions;
use face_detect_core::ports::{InferenceEngine, RawDetectionOutput};

/// Shared view into a [`MockInferenceEngine`]'s call history.
///
/// The engine is usually moved into a detector; cloning a handle first
/// keeps the counters reachable for assertions.
#[derive(Clone)]
pub struct MockEngineHandle {
    infer_count: Arc<Mutex<usize>>,
    last_input: Arc<Mutex<Option<Vec<f32>>>>,
}

impl MockEngineHandle {
    /// Returns the number of times `infer` was called.
    #[must_use]
    pub fn infer_count(&self) -> usize {
        *self
            .infer_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the most recent input tensor, if any.
    #[must_use]
    pub fn last_input(&self) -> Option<Vec<f32>> {
        self.last_input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Mock implementation of `InferenceEngine` for testing.
///
/// Hands back a fixed raw output for every call and records inputs for
/// assertions.
pub struct MockInferenceEngine {
    input_size: ImageDimensions,
    output: RawDetectionOutput,
    fail: bool,
    handle: MockEngineHandle,
}

impl MockInferenceEngine {
    /// Creates a mock engine returning `output` from every inference.
    #[must_use]
    pub fn new(input_size: ImageDimensions, output: RawDetectionOutput) -> Self {
        Self {
            input_size,
            output,
            fail: false,
            handle: MockEngineHandle {
                infer_count: Arc::new(Mutex::new(0)),
                last_input: Arc::new(Mutex::new(None)),
            },
        }
    }

    /// Creates a mock engine whose every inference fails.
    #[must_use]
    pub fn failing(input_size: ImageDimensions) -> Self {
        let mut engine = Self::new(
            input_size,
            RawDetectionOutput {
                regressors: vec![],
                scores: vec![],
            },
        );
        engine.fail = true;
        engine
    }

    /// Returns a handle to this engine's call history.
    #[must_use]
    pub fn handle(&self) -> MockEngineHandle {
        self.handle.clone()
    }
}

impl InferenceEngine for MockInferenceEngine {
    fn input_size(&self) -> ImageDimensions {
        self.input_size
    }

    fn infer(&mut self, input: &[f32]) -> anyhow::Result<RawDetectionOutput> {
        if let Ok(mut count) = self.handle.infer_count.lock() {
            *count += 1;
        }
        if let Ok(mut last) = self.handle.last_input.lock() {
            *last = Some(input.to_vec());
        }

        if self.fail {
            anyhow::bail!("Mock inference failure");
        }
        Ok(self.output.clone())
    }
}
