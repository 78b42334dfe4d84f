//! HTTP client for the Clearwave processing endpoint.
//!
//! One submission is one multipart `POST /api/process` exchange: the file
//! under the `file` part, the algorithm selections and parameters as text
//! parts. The response status is checked before the body is read; a success
//! body must deserialize into [`SubmissionResult`]. Failures are reported
//! through `tracing` and returned as [`AppError`]; the caller's result region
//! keeps its prior contents.

use std::time::Duration;

use reqwest::Client;
use uuid::Uuid;

use clearwave_core::config::ClientConfig;
use clearwave_core::constants::PROCESS_PATH;
use clearwave_core::error::AppError;
use clearwave_core::models::{SubmissionRequest, SubmissionResult};
use clearwave_core::page::ResultRegion;
use clearwave_core::validation::validate_submission;

/// HTTP client for the processing service.
#[derive(Clone, Debug)]
pub struct ProcessingClient {
    client: Client,
    base_url: String,
    max_file_size_bytes: usize,
}

impl ProcessingClient {
    pub fn new(base_url: String) -> Result<Self, AppError> {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_file_size_bytes: config.max_file_size_bytes,
        })
    }

    /// Create a client from environment: CLEARWAVE_API_URL (or API_URL).
    pub fn from_env() -> Result<Self, AppError> {
        Self::with_config(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one submission to the processing endpoint.
    ///
    /// The request is validated first; a rejected submission issues no
    /// network call. Consumes the request: a resubmission builds a new one.
    pub async fn process(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionResult, AppError> {
        validate_submission(&request, self.max_file_size_bytes)?;

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(request.file_bytes)
                    .file_name(request.file_name),
            )
            .text("denoisingAlgorithm", request.denoising_algorithm)
            .text("extractionAlgorithm", request.extraction_algorithm)
            .text("parameters", request.parameters);

        let url = self.build_url(PROCESS_PATH);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<SubmissionResult>().await.map_err(|e| {
            AppError::InvalidResponse(format!("Failed to parse response as JSON: {}", e))
        })
    }

    /// Full form-submission flow: process the request, then render the result
    /// into `region`.
    ///
    /// On failure the region keeps its prior contents and the error is
    /// reported through `tracing` before being returned.
    pub async fn submit(
        &self,
        request: SubmissionRequest,
        region: &mut ResultRegion,
    ) -> Result<SubmissionResult, AppError> {
        let submission_id = Uuid::new_v4();
        tracing::info!(
            submission_id = %submission_id,
            file = %request.file_name,
            file_size = request.file_size(),
            denoising_algorithm = %request.denoising_algorithm,
            extraction_algorithm = %request.extraction_algorithm,
            "Submitting file for processing"
        );

        match self.process(request).await {
            Ok(result) => {
                region.show_audio(&result);
                tracing::info!(
                    submission_id = %submission_id,
                    denoised_url = %result.denoised_url,
                    "Processing completed"
                );
                Ok(result)
            }
            Err(err) => {
                tracing::error!(
                    submission_id = %submission_id,
                    error = %err,
                    "Processing submission failed"
                );
                Err(err)
            }
        }
    }
}
