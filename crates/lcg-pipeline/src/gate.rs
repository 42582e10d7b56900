//! Syntax gate
//!
//! Scans cleaned text for module-system constructs the sandbox cannot
//! evaluate. Matching is plain substring search, not tokenization: a
//! forbidden token anywhere in the text rejects it, including inside
//! comments or string literals. That imprecision is deliberate; the gate is
//! a keyword filter, not a parser and not a security boundary.
//!
//! Beyond the module-system set, text that already carries its own
//! `render(` invocation is rejected too. Wrapping such text would emit a
//! second invocation and break the one-definition/one-invocation artifact
//! invariant, so it is turned away here instead.

use crate::types::{CleanedText, DisallowedToken, Verdict};

const FORBIDDEN: [DisallowedToken; 4] = [
    DisallowedToken::Import,
    DisallowedToken::Export,
    DisallowedToken::Require,
    DisallowedToken::RenderCall,
];

/// Decide whether `cleaned` may proceed to wrapping.
///
/// Never fails and never mutates: the text is either carried forward
/// unchanged inside `Verdict::Accepted` or dropped with the first token
/// that matched.
#[must_use]
pub fn gate(cleaned: CleanedText) -> Verdict {
    for token in FORBIDDEN {
        if cleaned.as_str().contains(token.needle()) {
            tracing::debug!(%token, "syntax gate rejected model output");
            return Verdict::Rejected(token);
        }
    }
    Verdict::Accepted(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn gate_str(text: &str) -> Verdict {
        gate(normalize(text))
    }

    #[test]
    fn accepts_plain_component_text() {
        let verdict = gate_str("() => <h1>Hi</h1>");
        assert!(matches!(verdict, Verdict::Accepted(_)));
    }

    #[test]
    fn rejects_import_anywhere() {
        assert_eq!(
            gate_str("import x from 'y'; <div/>"),
            Verdict::Rejected(DisallowedToken::Import)
        );
        assert_eq!(
            gate_str("<div/> // import later"),
            Verdict::Rejected(DisallowedToken::Import)
        );
    }

    #[test]
    fn rejects_export_and_require() {
        assert_eq!(
            gate_str("export default () => <div/>"),
            Verdict::Rejected(DisallowedToken::Export)
        );
        assert_eq!(
            gate_str("const m = require('fs')"),
            Verdict::Rejected(DisallowedToken::Require)
        );
    }

    #[test]
    fn rejects_tokens_inside_strings() {
        // Substring semantics: even quoted occurrences reject.
        assert_eq!(
            gate_str("() => <div>{'import nothing'}</div>"),
            Verdict::Rejected(DisallowedToken::Import)
        );
    }

    #[test]
    fn rejects_self_rendering_text() {
        assert_eq!(
            gate_str("const X = () => <div/>; render(<X/>);"),
            Verdict::Rejected(DisallowedToken::RenderCall)
        );
    }

    #[test]
    fn accepted_text_is_carried_unchanged() {
        let cleaned = normalize("<Box/>");
        match gate(cleaned.clone()) {
            Verdict::Accepted(text) => assert_eq!(text, cleaned),
            Verdict::Rejected(token) => panic!("unexpected rejection: {token}"),
        }
    }
}
