//! Metadata synthesis via the LLM provider.
//!
//! One completion request per catalog record. The response is expected to be
//! a bare JSON object; a markdown code fence around it is tolerated and
//! stripped. Any failure — transport, API error, empty response, unparseable
//! body — is captured as a tagged [`FallbackReason`] instead of an error, and
//! the caller substitutes the fixed fallback metadata. A single record's
//! failure never aborts the batch.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::extract::Variable;
use crate::llm::{CompletionRequest, LlmProvider, Message};
use crate::prompt::{build_metadata_prompt, METADATA_SYSTEM_PROMPT};

/// Form-field descriptor for one customizable variable, consumed by the
/// portal's form renderer. All fields are lenient on deserialization since
/// the model's output shape is not guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizableField {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: String,
}

/// Synthesized metadata for one catalog entry.
///
/// `category` is expected to come from the closed set named in the system
/// prompt, but is passed through unvalidated; same for `tags` non-emptiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMetadata {
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(rename = "customizableFields")]
    pub customizable_fields: Vec<CustomizableField>,
}

impl PromptMetadata {
    /// The fixed metadata substituted when synthesis fails.
    pub fn fallback(title: &str) -> Self {
        Self {
            category: "Productivity".to_string(),
            description: format!("A prompt for {title}"),
            tags: vec!["AI".to_string(), "Assistant".to_string()],
            customizable_fields: Vec::new(),
        }
    }
}

/// Why a record fell back to the fixed metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The API call itself failed (transport, HTTP status, rate limit).
    Api(String),
    /// The API succeeded but returned no text content.
    EmptyResponse,
    /// The response text was not a parseable metadata object.
    Parse(String),
}

/// Outcome of one synthesis attempt.
///
/// Modeled as data rather than an error so the converter can substitute the
/// fallback and keep going, and so tests can assert on the reason directly.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataOutcome {
    /// The model returned usable metadata.
    Generated(PromptMetadata),
    /// Synthesis failed; the fixed fallback applies.
    Fallback(FallbackReason),
}

impl MetadataOutcome {
    /// Returns true if the model produced usable metadata.
    pub fn is_generated(&self) -> bool {
        matches!(self, MetadataOutcome::Generated(_))
    }

    /// Resolves the outcome to concrete metadata, substituting the fixed
    /// fallback object for failures.
    pub fn into_metadata(self, title: &str) -> PromptMetadata {
        match self {
            MetadataOutcome::Generated(metadata) => metadata,
            MetadataOutcome::Fallback(_) => PromptMetadata::fallback(title),
        }
    }
}

/// Parsed shape of the model's response before per-field defaults.
///
/// Each field is optional: the model occasionally drops one, and a missing
/// field gets its default without discarding the rest of the object.
#[derive(Debug, Deserialize)]
struct RawMetadata {
    category: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
    #[serde(rename = "customizableFields")]
    customizable_fields: Option<Vec<CustomizableField>>,
}

static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(?:json)?\n?").expect("valid fence-open regex"));
static FENCE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n?```$").expect("valid fence-close regex"));

/// Strips an enclosing markdown code fence, if present.
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    let without_open = FENCE_OPEN.replace(trimmed, "");
    FENCE_CLOSE.replace(&without_open, "").to_string()
}

/// Parses response text into metadata, applying per-field defaults.
///
/// Note the per-field tags default is `["AI"]`, distinct from the whole-record
/// fallback's `["AI", "Assistant"]`: a parseable object missing only `tags`
/// is still a successful synthesis.
fn parse_metadata(text: &str, title: &str) -> Result<PromptMetadata, serde_json::Error> {
    let raw: RawMetadata = serde_json::from_str(text)?;
    Ok(PromptMetadata {
        category: raw.category.unwrap_or_else(|| "Productivity".to_string()),
        description: raw
            .description
            .unwrap_or_else(|| format!("A prompt for {title}")),
        tags: raw.tags.unwrap_or_else(|| vec!["AI".to_string()]),
        customizable_fields: raw.customizable_fields.unwrap_or_default(),
    })
}

/// Synthesizes metadata for one record via a single provider call.
pub async fn synthesize(
    provider: &dyn LlmProvider,
    model: &str,
    max_tokens: u32,
    title: &str,
    prompt_text: &str,
    variables: &[Variable],
) -> MetadataOutcome {
    let request = CompletionRequest::new(
        model,
        max_tokens,
        vec![Message::user(build_metadata_prompt(
            title,
            prompt_text,
            variables,
        ))],
    )
    .with_system(METADATA_SYSTEM_PROMPT);

    let response = match provider.complete(request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(title, error = %e, "Metadata request failed, using fallback");
            return MetadataOutcome::Fallback(FallbackReason::Api(e.to_string()));
        }
    };

    let Some(text) = response.first_text() else {
        tracing::warn!(title, "Metadata response had no text content, using fallback");
        return MetadataOutcome::Fallback(FallbackReason::EmptyResponse);
    };

    let cleaned = strip_code_fence(text);
    match parse_metadata(&cleaned, title) {
        Ok(metadata) => MetadataOutcome::Generated(metadata),
        Err(e) => {
            tracing::warn!(title, error = %e, "Metadata response was not valid JSON, using fallback");
            MetadataOutcome::Fallback(FallbackReason::Parse(e.to_string()))
        }
    }
}
