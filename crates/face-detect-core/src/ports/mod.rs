//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the domain core and external adapters.

mod inference;

pub use inference::{InferenceEngine, RawDetectionOutput};
