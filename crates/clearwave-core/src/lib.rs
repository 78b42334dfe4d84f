//! Clearwave Core Library
//!
//! This crate provides the domain models, error types, configuration,
//! validation, and presentation state shared by the Clearwave client crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod page;
pub mod ui;
pub mod validation;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::AppError;
pub use models::{SubmissionRequest, SubmissionResult};
pub use page::{audio_element, ResultRegion};
pub use ui::UiShell;
