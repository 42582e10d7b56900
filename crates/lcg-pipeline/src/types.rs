//! Data model for the sanitization pipeline
//!
//! Every decision point is a tagged variant, matched exhaustively at its
//! consumption site:
//! - `RawResponse`: what the transport handed over
//! - `Verdict`: the syntax gate's decision
//! - `ShapeKind`: surface-shape classification of accepted text
//! - `OutputCode`: the final renderable artifact
//! - `FallbackReason`: why a notice artifact was substituted

use serde::{Deserialize, Serialize};

/// Unvalidated result of one generation request.
///
/// Produced fresh per generation action and never persisted. Anything that
/// is not usable non-empty text collapses into `Empty` or `NonText`, both of
/// which the pipeline turns into the invalid-response notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawResponse {
    /// Usable non-empty text
    Text(String),
    /// Absent or whitespace-only body
    Empty,
    /// Body was decoded but is not textual
    NonText,
}

impl RawResponse {
    /// Classify a transport body.
    #[must_use]
    pub fn from_text(body: impl Into<String>) -> Self {
        let body = body.into();
        if body.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(body)
        }
    }

    /// Classify a decoded JSON value. Only non-empty strings are usable.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Self::from_text(text.clone()),
            _ => Self::NonText,
        }
    }
}

/// Model text with markdown fences and surrounding whitespace removed.
///
/// Only constructed by `normalize`, so holding one is proof the text has
/// been through fence stripping. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedText(String);

impl CleanedText {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    /// View the cleaned text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether nothing survived fence stripping.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for CleanedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CleanedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which forbidden construct the gate matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisallowedToken {
    /// ES module import
    Import,
    /// ES module export
    Export,
    /// CommonJS / dynamic require
    Require,
    /// Text already carries its own render invocation
    RenderCall,
}

impl DisallowedToken {
    /// The substring the gate scans for.
    #[must_use]
    pub fn needle(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Export => "export",
            Self::Require => "require",
            Self::RenderCall => "render(",
        }
    }
}

impl std::fmt::Display for DisallowedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.needle())
    }
}

/// Gate decision over cleaned text. Computed once per response, never revised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// No forbidden construct found; text carried forward unchanged
    Accepted(CleanedText),
    /// A forbidden construct appeared somewhere in the text
    Rejected(DisallowedToken),
}

/// Surface shape of accepted text, decided from its leading tokens only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Already a complete callable definition (arrow function or `function`)
    AlreadyCallable,
    /// A bare JSX expression that needs a zero-argument wrapper
    BareExpression,
}

/// Why a fixed notice artifact was substituted for model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackReason {
    /// Response was absent, empty, or not text
    InvalidResponse,
    /// The syntax gate rejected the text
    DisallowedSyntax,
    /// The generation request itself could not be completed
    TransportFailure,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::InvalidResponse => "invalid-response",
            Self::DisallowedSyntax => "disallowed-syntax",
            Self::TransportFailure => "transport-failure",
        };
        write!(f, "{name}")
    }
}

/// The final artifact handed to the live-evaluation sandbox.
///
/// Invariant: contains exactly one named component definition and exactly
/// one `render(...)` invocation referencing it, on every code path the
/// pipeline can take, including all three fallback notices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputCode(String);

impl OutputCode {
    pub(crate) fn new(code: String) -> Self {
        Self(code)
    }

    /// View the artifact source.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying source string.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for OutputCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
