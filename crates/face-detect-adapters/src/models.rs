//! Model file resolution and integrity checking.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Placeholder checksum indicating verification should be skipped.
const PLACEHOLDER_CHECKSUM: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Model metadata.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// Model name/identifier.
    pub name: &'static str,
    /// Expected SHA256 hash. Set to all zeros to skip verification during development.
    pub sha256: &'static str,
    /// Filename in models directory.
    pub filename: &'static str,
}

/// Known models.
pub const MODELS: &[ModelInfo] = &[ModelInfo {
    name: "blazeface",
    sha256: PLACEHOLDER_CHECKSUM, // TODO: Update with real hash once the model is published
    filename: "blazeface.onnx",
}];

/// Returns the models directory path.
///
/// Uses `XDG_DATA_HOME/face-detect/models` or `~/.local/share/face-detect/models`.
#[must_use]
pub fn models_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("face-detect")
        .join("models")
}

/// Returns the path to a specific model file.
#[must_use]
pub fn model_path(name: &str) -> Option<PathBuf> {
    MODELS
        .iter()
        .find(|m| m.name == name)
        .map(|m| models_dir().join(m.filename))
}

/// Reads a model file and verifies its checksum.
///
/// A placeholder checksum (all zeros) skips verification.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its hash does not match
/// `expected_sha256`.
pub fn read_model_bytes(path: impl AsRef<Path>, expected_sha256: &str) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read model file: {}", path.display()))?;

    if expected_sha256 == PLACEHOLDER_CHECKSUM {
        debug!(
            "Skipping checksum verification for {} (placeholder checksum)",
            path.display()
        );
        return Ok(bytes);
    }

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let hash = format!("{:x}", hasher.finalize());

    if hash != expected_sha256 {
        anyhow::bail!(
            "Checksum mismatch for {}: expected {}, got {}. \
             Try replacing the file with a fresh copy.",
            path.display(),
            expected_sha256,
            hash
        );
    }

    debug!("Verified model {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

/// Checks if all models are installed.
#[must_use]
pub fn all_models_installed() -> bool {
    let dir = models_dir();
    MODELS.iter().all(|m| dir.join(m.filename).exists())
}
