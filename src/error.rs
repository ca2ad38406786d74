//! Error types for prompt-forge operations.
//!
//! Defines error types for the three subsystems that can fail:
//! - Credential/configuration loading
//! - LLM API interactions
//! - CSV conversion and catalog output

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration.
///
/// All of these are fatal: every downstream network call depends on the
/// API key, so there is no partial or default credential.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read env file '{path}': {source}")]
    EnvFileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{key}' not found in {path}")]
    KeyNotFound { key: String, path: PathBuf },

    #[error("'{key}' in {path} is empty")]
    EmptyValue { key: String, path: PathBuf },
}

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },
}

/// Errors that can occur during CSV conversion and catalog output.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to open input CSV '{path}': {source}")]
    InputUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input CSV '{path}' is missing required columns 'act'/'prompt': {message}")]
    MissingColumns { path: PathBuf, message: String },

    #[error("Failed to parse CSV record {index}: {message}")]
    MalformedRecord { index: usize, message: String },

    #[error("Failed to write catalog '{path}': {source}")]
    OutputUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
