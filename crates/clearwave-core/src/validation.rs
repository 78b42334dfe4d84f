//! Submission validation
//!
//! A submission is checked before any network I/O:
//! - File: name and bytes present, size within the configured cap
//! - Algorithms: both identifiers must come from the known catalogs
//! - Parameters: free-form, length-capped, may be empty

use crate::constants::{DENOISING_ALGORITHMS, EXTRACTION_ALGORITHMS};
use crate::error::AppError;
use crate::models::SubmissionRequest;

/// Maximum length for the free-form parameters field (512 characters)
pub const MAX_PARAMETERS_LENGTH: usize = 512;

/// Validate the file part of a submission.
pub fn validate_file(
    file_name: &str,
    file_bytes: &[u8],
    max_file_size_bytes: usize,
) -> Result<(), AppError> {
    if file_name.is_empty() {
        return Err(AppError::invalid_input("No file selected"));
    }

    if file_bytes.is_empty() {
        return Err(AppError::invalid_input(format!(
            "File '{}' is empty",
            file_name
        )));
    }

    if file_bytes.len() > max_file_size_bytes {
        return Err(AppError::invalid_input(format!(
            "File '{}' is {} bytes, exceeding the maximum of {} bytes",
            file_name,
            file_bytes.len(),
            max_file_size_bytes
        )));
    }

    Ok(())
}

/// Validate an algorithm identifier against its catalog.
pub fn validate_algorithm(
    identifier: &str,
    catalog: &[&str],
    field: &str,
) -> Result<(), AppError> {
    if identifier.is_empty() {
        return Err(AppError::invalid_input(format!("Missing {}", field)));
    }

    if !catalog.contains(&identifier) {
        return Err(AppError::invalid_input(format!(
            "Unknown {} '{}'. Supported: {}",
            field,
            identifier,
            catalog.join(", ")
        )));
    }

    Ok(())
}

/// Validate the free-form parameters string.
pub fn validate_parameters(parameters: &str) -> Result<(), AppError> {
    if parameters.len() > MAX_PARAMETERS_LENGTH {
        return Err(AppError::invalid_input(format!(
            "Parameters exceed maximum length of {} characters",
            MAX_PARAMETERS_LENGTH
        )));
    }

    Ok(())
}

/// Validate a whole submission before it is sent.
pub fn validate_submission(
    request: &SubmissionRequest,
    max_file_size_bytes: usize,
) -> Result<(), AppError> {
    validate_file(&request.file_name, &request.file_bytes, max_file_size_bytes)?;
    validate_algorithm(
        &request.denoising_algorithm,
        DENOISING_ALGORITHMS,
        "denoising algorithm",
    )?;
    validate_algorithm(
        &request.extraction_algorithm,
        EXTRACTION_ALGORITHMS,
        "extraction algorithm",
    )?;
    validate_parameters(&request.parameters)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 1024;

    fn valid_request() -> SubmissionRequest {
        SubmissionRequest::new("clip.mp3", vec![1, 2, 3], "wiener", "mfcc", "strength=0.5")
    }

    #[test]
    fn accepts_valid_submission() {
        assert!(validate_submission(&valid_request(), MAX).is_ok());
    }

    #[test]
    fn accepts_empty_parameters() {
        let mut request = valid_request();
        request.parameters = String::new();
        assert!(validate_submission(&request, MAX).is_ok());
    }

    #[test]
    fn rejects_missing_file_name() {
        let err = validate_file("", &[1], MAX).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(err.to_string().contains("No file selected"));
    }

    #[test]
    fn rejects_empty_file() {
        let err = validate_file("clip.mp3", &[], MAX).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_oversized_file() {
        let bytes = vec![0u8; MAX + 1];
        let err = validate_file("clip.mp3", &bytes, MAX).unwrap_err();
        assert!(err.to_string().contains("exceeding"));
    }

    #[test]
    fn accepts_file_at_size_limit() {
        let bytes = vec![0u8; MAX];
        assert!(validate_file("clip.mp3", &bytes, MAX).is_ok());
    }

    #[test]
    fn rejects_empty_algorithm() {
        let err =
            validate_algorithm("", DENOISING_ALGORITHMS, "denoising algorithm").unwrap_err();
        assert!(err.to_string().contains("Missing denoising algorithm"));
    }

    #[test]
    fn rejects_unknown_algorithm() {
        let err = validate_algorithm("loudness-war", EXTRACTION_ALGORITHMS, "extraction algorithm")
            .unwrap_err();
        assert!(err.to_string().contains("Unknown extraction algorithm"));
    }

    #[test]
    fn every_cataloged_algorithm_is_accepted() {
        for id in DENOISING_ALGORITHMS {
            assert!(validate_algorithm(id, DENOISING_ALGORITHMS, "denoising algorithm").is_ok());
        }
        for id in EXTRACTION_ALGORITHMS {
            assert!(validate_algorithm(id, EXTRACTION_ALGORITHMS, "extraction algorithm").is_ok());
        }
    }

    #[test]
    fn rejects_oversized_parameters() {
        let err = validate_parameters(&"x".repeat(MAX_PARAMETERS_LENGTH + 1)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn accepts_parameters_at_length_limit() {
        assert!(validate_parameters(&"x".repeat(MAX_PARAMETERS_LENGTH)).is_ok());
    }
}
