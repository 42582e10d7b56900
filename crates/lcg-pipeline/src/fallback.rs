//! Fallback notice artifacts
//!
//! A fixed, self-contained artifact per failure reason. Each defines a
//! single visible notice component with a distinct human-readable message
//! and the shared styling, plus exactly one render invocation, so the
//! artifact invariant holds even when everything upstream went wrong.
//! Total: has no failure mode of its own.

use crate::types::{FallbackReason, OutputCode};

const INVALID_RESPONSE_MSG: &str = "Invalid model response";
const DISALLOWED_SYNTAX_MSG: &str =
    "Model output contains unsupported syntax (import/export/require)";
const TRANSPORT_FAILURE_MSG: &str = "Failed to generate component";

fn notice(message: &str) -> OutputCode {
    OutputCode::new(format!(
        "const Notice = () => (\n  <div className=\"text-red-500 p-4 bg-white rounded shadow\">\n    {message}\n  </div>\n);\nrender(<Notice />);\n"
    ))
}

/// The fixed artifact for `reason`. Deterministic: the same reason always
/// yields a byte-identical artifact.
#[must_use]
pub fn fallback(reason: FallbackReason) -> OutputCode {
    match reason {
        FallbackReason::InvalidResponse => notice(INVALID_RESPONSE_MSG),
        FallbackReason::DisallowedSyntax => notice(DISALLOWED_SYNTAX_MSG),
        FallbackReason::TransportFailure => notice(TRANSPORT_FAILURE_MSG),
    }
}
