//! Shape classification
//!
//! Decides from the leading tokens alone whether accepted text is already a
//! complete callable definition or a bare JSX expression that needs a
//! wrapper. This is a surface heuristic, not a parse: only the
//! zero-argument arrow form, the single `props` arrow form, and the
//! `function` keyword are recognized. Multi-parameter or destructured
//! signatures fall through to `BareExpression` (known limitation, kept
//! narrow on purpose).

use crate::types::{CleanedText, ShapeKind};

const CALLABLE_PREFIXES: [&str; 3] = ["() =>", "(props) =>", "function"];

/// Classify the surface shape of accepted text.
#[must_use]
pub fn classify(text: &CleanedText) -> ShapeKind {
    let head = text.as_str().trim_start();
    if CALLABLE_PREFIXES.iter().any(|prefix| head.starts_with(prefix)) {
        ShapeKind::AlreadyCallable
    } else {
        ShapeKind::BareExpression
    }
}
