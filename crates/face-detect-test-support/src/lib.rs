//! Test support utilities for face-detect.
//!
//! Provides a mock inference engine, raw output builders, synthetic image
//! builders, and tracing setup for testing the detection pipeline without a
//! real model.
//!
//! # Example
//!
//! ```
//! use face_detect_core::domain::ImageDimensions;
//! use face_detect_test_support::{MockInferenceEngine, RawOutputBuilder};
//!
//! // One confident detection at anchor 0, everything else suppressed
//! let output = RawOutputBuilder::blazeface().with_score(0, 2.0).build();
//! let engine = MockInferenceEngine::new(ImageDimensions::new(128, 128), output);
//! ```

mod builders;
mod logging;
mod mocks;

pub use builders::{RawOutputBuilder, SyntheticImageBuilder};
pub use logging::init_test_logging;
pub use mocks::{MockEngineHandle, MockInferenceEngine};
