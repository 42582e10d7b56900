//! Top-level pipeline
//!
//! `process` is total: every possible raw response, including non-text,
//! empty text, and any text content, comes back as a valid artifact. Core
//! failures are never surfaced to the caller; each one terminates in a
//! rendered notice instead.

use crate::classify::classify;
use crate::fallback::fallback;
use crate::gate::gate;
use crate::normalize::normalize;
use crate::types::{FallbackReason, OutputCode, RawResponse, Verdict};
use crate::wrap::wrap;

/// Run one raw response through normalize -> gate -> classify -> wrap,
/// short-circuiting to a fallback notice wherever a stage cannot proceed.
///
/// Synchronous, pure, no suspension points. Each call derives everything
/// fresh from `raw`; nothing is shared across invocations.
#[must_use]
pub fn process(raw: &RawResponse) -> OutputCode {
    let text = match raw {
        RawResponse::Text(text) => text,
        RawResponse::Empty | RawResponse::NonText => {
            tracing::debug!("unusable raw response, substituting invalid-response notice");
            return fallback(FallbackReason::InvalidResponse);
        }
    };

    let cleaned = normalize(text);
    if cleaned.is_empty() {
        // Fences with nothing inside them. Nothing left to wrap.
        tracing::debug!("nothing survived normalization, substituting invalid-response notice");
        return fallback(FallbackReason::InvalidResponse);
    }

    match gate(cleaned) {
        Verdict::Rejected(token) => {
            tracing::debug!(%token, "substituting disallowed-syntax notice");
            fallback(FallbackReason::DisallowedSyntax)
        }
        Verdict::Accepted(cleaned) => {
            let shape = classify(&cleaned);
            tracing::debug!(?shape, "wrapping accepted model output");
            wrap(&cleaned, shape)
        }
    }
}
