//! Configuration loading for prompt-forge.
//!
//! The API key is read from a dotenv-style file rather than the process
//! environment so the tool can point at an existing `.env.local` without
//! exporting secrets into the shell. Everything else comes from CLI flags and
//! is carried in an explicit [`Settings`] value passed down the call chain.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Env-file key holding the Anthropic API key.
pub const API_KEY_NAME: &str = "ANTHROPIC_API_KEY";

/// Runtime settings for a conversion run.
///
/// Assembled once from CLI arguments and passed into the converter; there is
/// no global state.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the input CSV (`act`/`prompt` columns).
    pub input: PathBuf,
    /// Path the JSON catalog is written to.
    pub output: PathBuf,
    /// Model identifier sent to the API.
    pub model: String,
    /// First catalog id; entries are numbered contiguously from here.
    pub start_id: u64,
    /// Maximum output tokens per metadata request.
    pub max_tokens: u32,
    /// Pause between consecutive records.
    pub delay: Duration,
    /// HTTP request timeout.
    pub timeout: Duration,
}

/// Extracts the Anthropic API key from a dotenv-style file.
///
/// Scans for the first line starting with `ANTHROPIC_API_KEY`, splits on the
/// first `=`, and strips surrounding whitespace and double quotes. Fails if
/// the file cannot be read or the key is absent or empty.
pub fn load_api_key(env_path: &Path) -> Result<String, ConfigError> {
    let contents = fs::read_to_string(env_path).map_err(|source| ConfigError::EnvFileUnreadable {
        path: env_path.to_path_buf(),
        source,
    })?;

    for line in contents.lines() {
        if !line.starts_with(API_KEY_NAME) {
            continue;
        }
        let Some((_, raw)) = line.split_once('=') else {
            continue;
        };
        let value = raw.trim().trim_matches('"');
        if value.is_empty() {
            return Err(ConfigError::EmptyValue {
                key: API_KEY_NAME.to_string(),
                path: env_path.to_path_buf(),
            });
        }
        return Ok(value.to_string());
    }

    Err(ConfigError::KeyNotFound {
        key: API_KEY_NAME.to_string(),
        path: env_path.to_path_buf(),
    })
}
