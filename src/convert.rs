//! Batch conversion of CSV rows into catalog entries.
//!
//! Strictly sequential: one provider call per record, in input order, with a
//! fixed pause between records to bound the outbound request rate. There is
//! no adaptive backoff and no concurrency; a record's synthesis failure is
//! absorbed as fallback metadata and the batch continues.

use crate::catalog::{read_rows, PromptEntry};
use crate::config::Settings;
use crate::error::ConvertError;
use crate::extract::extract_variables;
use crate::llm::LlmProvider;
use crate::synth::synthesize;

/// Title prefix length for progress lines.
const PROGRESS_TITLE_CHARS: usize = 50;

/// Converts CSV rows into catalog entries using the given provider.
pub struct Converter<'a> {
    settings: &'a Settings,
    provider: &'a dyn LlmProvider,
}

impl<'a> Converter<'a> {
    pub fn new(settings: &'a Settings, provider: &'a dyn LlmProvider) -> Self {
        Self { settings, provider }
    }

    /// Runs the conversion over the first `limit` rows (or all rows).
    ///
    /// Entries come back in input order with ids assigned contiguously from
    /// `settings.start_id`. Progress is printed per record; the per-record
    /// pause is skipped after the last record.
    pub async fn run(&self, limit: Option<usize>) -> Result<Vec<PromptEntry>, ConvertError> {
        let rows = read_rows(&self.settings.input)?;
        let total = match limit {
            Some(limit) => limit.min(rows.len()),
            None => rows.len(),
        };

        println!("Processing {total} prompts...");

        let mut entries = Vec::with_capacity(total);
        for (index, row) in rows.into_iter().take(total).enumerate() {
            let title = row.act.trim().to_string();
            let prompt_text = row.prompt.trim().to_string();

            let title_prefix: String = title.chars().take(PROGRESS_TITLE_CHARS).collect();
            println!("[{}/{}] Processing: {}...", index + 1, total, title_prefix);

            let variables = extract_variables(&prompt_text);
            let outcome = synthesize(
                self.provider,
                &self.settings.model,
                self.settings.max_tokens,
                &title,
                &prompt_text,
                &variables,
            )
            .await;
            let metadata = outcome.into_metadata(&title);

            entries.push(PromptEntry {
                id: self.settings.start_id + index as u64,
                title,
                category: metadata.category,
                description: metadata.description,
                prompt: prompt_text,
                tags: metadata.tags,
                customizable_fields: metadata.customizable_fields,
            });

            // Rate limiting - be nice to the API
            if index < total - 1 {
                tokio::time::sleep(self.settings.delay).await;
            }
        }

        Ok(entries)
    }
}
