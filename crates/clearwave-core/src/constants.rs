//! Shared constants for the Clearwave client crates.

/// Path of the processing endpoint, relative to the service base URL.
pub const PROCESS_PATH: &str = "/api/process";

/// MIME type declared on rendered audio sources.
pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// Denoising algorithms the processing service accepts. The identifiers are
/// opaque to the client; the service interprets them.
pub const DENOISING_ALGORITHMS: &[&str] = &["spectral-subtraction", "spectral-gate", "wiener"];

/// Feature-extraction algorithms the processing service accepts.
pub const EXTRACTION_ALGORITHMS: &[&str] = &["mfcc", "chroma", "spectral-contrast"];
