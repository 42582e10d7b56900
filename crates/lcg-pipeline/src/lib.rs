//! LCG Pipeline
//!
//! Converts freeform generative-model output into a safely evaluable JSX
//! artifact for a live rendering sandbox, with a deterministic, total
//! fallback path.
//!
//! # Overview
//!
//! The pipeline runs strictly downstream:
//! - **normalize**: strip markdown fences and surrounding whitespace
//! - **gate**: reject module-system constructs (substring heuristic)
//! - **classify**: callable definition vs. bare expression
//! - **wrap**: one canonical definition plus one render invocation
//! - **fallback**: fixed notice artifacts for every failure reason
//!
//! `process` ties the stages together and never fails: for every possible
//! raw response it returns an artifact satisfying the
//! one-definition/one-invocation invariant.
//!
//! # Example
//!
//! ```rust
//! use lcg_pipeline::{process, RawResponse};
//!
//! let raw = RawResponse::from_text("```jsx\n() => <h1>Hi</h1>\n```");
//! let code = process(&raw);
//! assert!(code.as_str().contains("render(<Component />);"));
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod fallback;
pub mod gate;
pub mod normalize;
pub mod pipeline;
pub mod types;
pub mod wrap;

// Re-exports
pub use classify::classify;
pub use fallback::fallback;
pub use gate::gate;
pub use normalize::normalize;
pub use pipeline::process;
pub use types::{
    CleanedText, DisallowedToken, FallbackReason, OutputCode, RawResponse, ShapeKind, Verdict,
};
pub use wrap::{wrap, COMPONENT_NAME};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for pipeline consumers
    pub use crate::{
        fallback, process, FallbackReason, OutputCode, RawResponse, ShapeKind, Verdict,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
