//! Prompt construction for metadata synthesis.
//!
//! One system prompt and one user-message builder. The system prompt pins the
//! closed category set and demands JSON-only output; the user message carries
//! the title, a truncated prompt body, the discovered variable names, and the
//! exact JSON shape the model must return.

use crate::extract::Variable;

/// Prompt bodies are truncated to this many characters in the request
/// payload. The full body still goes into the output catalog untouched.
pub const PROMPT_BODY_LIMIT: usize = 1500;

/// System prompt for metadata synthesis.
pub const METADATA_SYSTEM_PROMPT: &str = r#"You are a prompt metadata generator. Given a prompt title and content, generate:
1. category: One of these categories: "Writing", "Coding", "Research", "Analysis", "Conversation", "Creative", "Business", "Education", "Productivity", "Critical Thinking", "Language", "Technical"
2. description: A concise 10-15 word description of what this prompt does
3. tags: 2-4 relevant tags as an array
4. customizableFields: For each variable, generate appropriate field metadata

Respond ONLY with valid JSON, no markdown, no explanation."#;

/// Builds the user message for one record's metadata request.
///
/// The body is truncated to [`PROMPT_BODY_LIMIT`] characters (not bytes, so
/// multi-byte text never splits mid-character).
pub fn build_metadata_prompt(title: &str, prompt_text: &str, variables: &[Variable]) -> String {
    let variables_str = if variables.is_empty() {
        "None".to_string()
    } else {
        variables
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let truncated: String = prompt_text.chars().take(PROMPT_BODY_LIMIT).collect();

    format!(
        r#"Title: {title}

Prompt content:
{truncated}

Variables found: {variables_str}

Generate JSON with this exact structure:
{{
  "category": "Category Name",
  "description": "Short description here",
  "tags": ["Tag1", "Tag2", "Tag3"],
  "customizableFields": [
    {{
      "name": "variable_name",
      "label": "Human readable label",
      "type": "text|textarea|select",
      "required": true|false,
      "placeholder": "Example placeholder"
    }}
  ]
}}

If no variables, customizableFields should be an empty array []."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_variables;

    #[test]
    fn test_variable_names_joined() {
        let vars = extract_variables("${os:Ubuntu} and {topic}");
        let prompt = build_metadata_prompt("Linux Terminal", "body", &vars);
        assert!(prompt.contains("Variables found: os, topic"));
    }

    #[test]
    fn test_no_variables_renders_none() {
        let prompt = build_metadata_prompt("Poet", "write poems", &[]);
        assert!(prompt.contains("Variables found: None"));
    }

    #[test]
    fn test_body_truncated_to_limit() {
        let long_body = "x".repeat(PROMPT_BODY_LIMIT + 500);
        let prompt = build_metadata_prompt("Title", &long_body, &[]);
        assert!(prompt.contains(&"x".repeat(PROMPT_BODY_LIMIT)));
        assert!(!prompt.contains(&"x".repeat(PROMPT_BODY_LIMIT + 1)));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // 1600 two-byte chars; a byte slice at 1500 would split mid-character.
        let body = "é".repeat(1600);
        let prompt = build_metadata_prompt("Title", &body, &[]);
        assert!(prompt.contains(&"é".repeat(PROMPT_BODY_LIMIT)));
        assert!(!prompt.contains(&"é".repeat(PROMPT_BODY_LIMIT + 1)));
    }

    #[test]
    fn test_system_prompt_pins_category_set_and_json_only() {
        assert!(METADATA_SYSTEM_PROMPT.contains("\"Productivity\""));
        assert!(METADATA_SYSTEM_PROMPT.contains("ONLY with valid JSON"));
    }
}
