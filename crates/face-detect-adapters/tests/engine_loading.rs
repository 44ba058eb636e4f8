//! Integration tests for engine construction.
//!
//! Building a real session needs a valid ONNX model, which is not shipped
//! with the repository. These tests cover the failure paths that need no
//! model file; success paths run in environments that provision one via
//! `face_detect_adapters::models`.

#![allow(clippy::unwrap_used)]

use face_detect_adapters::{model_path, EngineOptions, OrtEngine};
use face_detect_core::ports::InferenceEngine;

#[test]
fn test_garbage_bytes_fail_to_build() {
    let result = OrtEngine::from_bytes(b"not an onnx model", &EngineOptions::default());
    assert!(result.is_err(), "malformed model bytes must be rejected");
}

#[test]
fn test_empty_bytes_fail_to_build() {
    let result = OrtEngine::from_bytes(&[], &EngineOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_missing_file_fails_to_build() {
    let result = OrtEngine::from_file(
        "/nonexistent/blazeface.onnx",
        &EngineOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_default_options() {
    let options = EngineOptions::default();
    assert_eq!(options.thread_count, 2);
    assert!(!options.use_accelerator);
}

#[test]
fn test_option_builders() {
    let options = EngineOptions::default()
        .with_thread_count(4)
        .with_accelerator(true);
    assert_eq!(options.thread_count, 4);
    assert!(options.use_accelerator);
}

#[test]
fn test_installed_model_builds_if_present() {
    // Exercised only where a model has been provisioned into the models dir.
    let Some(path) = model_path("blazeface").filter(|p| p.exists()) else {
        eprintln!("Skipping: blazeface.onnx not installed");
        return;
    };

    let engine = OrtEngine::from_file(&path, &EngineOptions::default()).unwrap();
    let size = engine.input_size();
    assert!(size.width > 0 && size.height > 0);
}
