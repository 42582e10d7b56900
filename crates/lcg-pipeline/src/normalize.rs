//! Input normalization
//!
//! Strips markdown code-fence delimiters (with or without a language tag)
//! anywhere in the text and trims surrounding whitespace. Total and
//! idempotent: normalizing already-normalized text returns it unchanged.

use crate::types::CleanedText;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an opening fence with an optional language hint, or a bare
/// closing fence.
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[A-Za-z0-9_-]*").expect("fence pattern compiles"));

/// Remove every fence delimiter from `raw`, then trim.
#[must_use]
pub fn normalize(raw: &str) -> CleanedText {
    let stripped = FENCE.replace_all(raw, "");
    CleanedText::new(stripped.trim().to_string())
}
