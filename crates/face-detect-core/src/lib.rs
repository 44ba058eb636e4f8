//! Face Detect Core - Detection pipeline and domain types
//!
//! This crate contains the geometric preprocessing, anchor generation, and
//! output decoding around a pluggable inference engine, plus the domain
//! types detections are reported in.

pub mod detector;
pub mod domain;
pub mod geometry;
pub mod ports;

pub use detector::{DetectorConfig, FaceDetector};
pub use domain::{FaceDetection, FaceLocation, ImageDimensions, Point, RegionOfInterest};
pub use ports::{InferenceEngine, RawDetectionOutput};
