//! Core domain types for face detection.

mod detection;
mod region;

pub use detection::{FaceDetection, FaceLocation};
pub use region::{ImageDimensions, Point, RegionOfInterest};
