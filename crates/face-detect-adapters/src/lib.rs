//! Face Detect Adapters - External adapters for face-detect.
//!
//! This crate provides adapters for:
//! - ONNX Runtime inference engine
//! - Model file resolution and integrity checking

pub mod models;
pub mod ort_engine;

pub use models::{model_path, models_dir};
pub use ort_engine::{EngineOptions, OrtEngine};
