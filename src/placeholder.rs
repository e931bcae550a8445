//! `{{name}}` placeholder substitution for the TypeScript stubs.
//!
//! Substitution is literal and single-pass per key: a substituted value that itself
//! contains `{{other}}` is left as-is and never re-expanded.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// Variable map handed to [`substitute`] and [`validate_coverage`].
pub type Variables = BTreeMap<String, String>;

/// Replaces every `{{key}}` in `text` with the value of `key`, for every key of
/// `variables`, whatever characters the key contains.
///
/// Every occurrence is located in the original text before any replacement happens,
/// so a key's value is never scanned again for placeholders.
///
/// # Errors
/// * `Error::TemplateError` if the key pattern cannot be compiled
pub fn substitute(text: &str, variables: &Variables) -> Result<String> {
    if variables.is_empty() {
        return Ok(text.to_string());
    }
    let alternation: Vec<String> = variables
        .keys()
        .map(|key| regex::escape(&format!("{{{{{key}}}}}")))
        .collect();
    let keys = Regex::new(&alternation.join("|"))
        .map_err(|e| Error::TemplateError(format!("cannot build placeholder pattern: {e}")))?;

    Ok(keys
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let token = &caps[0];
            let key = &token[2..token.len() - 2];
            variables.get(key).cloned().unwrap_or_else(|| token.to_string())
        })
        .into_owned())
}

/// Returns every distinct placeholder name in `text`, in first-occurrence order.
pub fn extract_variable_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Fails with [`Error::MissingVariables`] listing every placeholder of `text`
/// that `variables` does not define.
pub fn validate_coverage(text: &str, variables: &Variables) -> Result<()> {
    let missing: Vec<String> = extract_variable_names(text)
        .into_iter()
        .filter(|name| !variables.contains_key(name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingVariables(missing))
    }
}

/// Checks coverage, then substitutes.
pub fn render_checked(text: &str, variables: &Variables) -> Result<String> {
    validate_coverage(text, variables)?;
    substitute(text, variables)
}
