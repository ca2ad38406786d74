//! Customizable-variable extraction from prompt bodies.
//!
//! Prompt templates embed substitution slots in two surface syntaxes:
//!
//! - `${name}` / `${name:default}` — explicit slot, optionally with a default
//! - `{name}` — bare identifier slot
//!
//! Both are unified into a single first-seen-ordered variable list,
//! deduplicated by name. The explicit syntax takes priority because it can
//! carry a default value.
//!
//! No nesting, escaping, or code-fence awareness is implemented: a
//! placeholder-looking token inside an embedded code sample will match unless
//! its identifier is on the stoplist. That imprecision is intentional and must
//! be preserved; the stoplist exists precisely to suppress the most common of
//! those false positives.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A named substitution slot discovered in a prompt body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Slot name as captured (case preserved).
    pub name: String,
    /// Default value, empty unless the `${name:default}` form supplied one.
    pub default: String,
}

/// Identifiers that commonly appear in brace syntax inside example code and
/// are not substitution slots. Matched case-insensitively against pattern-B
/// captures only.
const STOPLIST: &[&str] = &[
    "like", "this", "example", "text", "code", "json", "html", "css", "js",
];

/// `${name}` or `${name:default}`. Name is everything up to the first `:` or
/// `}`; default is everything between `:` and the closing `}`.
static EXPLICIT_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}:]+)(?::([^}]*))?\}").expect("valid explicit-slot regex"));

/// Bare `{identifier}` slots.
static BARE_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("valid bare-slot regex"));

/// Extracts customizable variables from a prompt body.
///
/// Returns variables in first-seen order, deduplicated by exact name.
/// Explicit `${...}` matches are collected first, so a bare `{name}` never
/// shadows an explicit slot of the same name.
pub fn extract_variables(prompt_text: &str) -> Vec<Variable> {
    let mut variables: Vec<Variable> = Vec::new();

    for caps in EXPLICIT_SLOT.captures_iter(prompt_text) {
        let name = caps[1].trim();
        if name.is_empty() {
            continue;
        }
        let default = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .unwrap_or("")
            .to_string();
        if variables.iter().all(|v| v.name != name) {
            variables.push(Variable {
                name: name.to_string(),
                default,
            });
        }
    }

    for caps in BARE_SLOT.captures_iter(prompt_text) {
        let name = &caps[1];
        if STOPLIST.contains(&name.to_lowercase().as_str()) {
            continue;
        }
        if variables.iter().all(|v| v.name != name) {
            variables.push(Variable {
                name: name.to_string(),
                default: String::new(),
            });
        }
    }

    variables
}
