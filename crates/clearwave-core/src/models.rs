//! Domain models for one processing exchange.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One form submission: the selected file plus the algorithm choices.
///
/// A request is built fresh per submission and consumed when it is sent;
/// resubmitting constructs a new value.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    /// File name reported to the service (multipart `filename`).
    pub file_name: String,
    /// Raw bytes of the selected file.
    pub file_bytes: Vec<u8>,
    /// Denoising algorithm identifier.
    pub denoising_algorithm: String,
    /// Feature-extraction algorithm identifier.
    pub extraction_algorithm: String,
    /// Free-form, algorithm-specific configuration. May be empty.
    pub parameters: String,
}

impl SubmissionRequest {
    pub fn new(
        file_name: impl Into<String>,
        file_bytes: Vec<u8>,
        denoising_algorithm: impl Into<String>,
        extraction_algorithm: impl Into<String>,
        parameters: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            file_bytes,
            denoising_algorithm: denoising_algorithm.into(),
            extraction_algorithm: extraction_algorithm.into(),
            parameters: parameters.into(),
        }
    }

    /// Build a submission from a file on disk.
    ///
    /// Rejects paths containing `..` components.
    pub fn from_path(
        path: &Path,
        denoising_algorithm: &str,
        extraction_algorithm: &str,
        parameters: &str,
    ) -> Result<Self, AppError> {
        if path
            .components()
            .any(|c| c == std::path::Component::ParentDir)
        {
            return Err(AppError::invalid_input(format!(
                "Invalid path: {}",
                path.display()
            )));
        }

        let file_bytes = std::fs::read(path).map_err(|e| {
            AppError::invalid_input(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.mp3");

        Ok(Self::new(
            file_name,
            file_bytes,
            denoising_algorithm,
            extraction_algorithm,
            parameters,
        ))
    }

    pub fn file_size(&self) -> usize {
        self.file_bytes.len()
    }
}

/// Successful processing response.
///
/// `denoisedUrl` is required: a success body without it fails
/// deserialization instead of rendering a bogus source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    /// URL of the denoised, playable audio resource.
    pub denoised_url: String,
}
