//! prompt-forge: CSV prompt-template tables to an enriched JSON catalog.
//!
//! This library converts a CSV of prompt templates (one `act`/`prompt` row per
//! template) into a JSON catalog where each entry carries LLM-synthesized
//! metadata: category, description, tags, and form-field descriptors for the
//! customizable variables found in the prompt body.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod llm;
pub mod prompt;
pub mod synth;

pub use error::{ConfigError, ConvertError, LlmError};
