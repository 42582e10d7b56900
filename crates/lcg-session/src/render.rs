//! Sandbox-facing render surface
//!
//! What the live-evaluation sandbox consumes: the artifact source, an
//! explicit-render execution mode (the sandbox must never add an implicit
//! top-level render of its own), and the scope binding naming the runtime
//! globals the artifact may reference.

use lcg_pipeline::OutputCode;
use serde::{Deserialize, Serialize};

/// How the sandbox should evaluate the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvalMode {
    /// The artifact supplies its own `render(...)` call; the sandbox must
    /// not render the last expression implicitly
    ExplicitRender,
}

/// Runtime globals the artifact is allowed to reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeBinding {
    globals: Vec<String>,
}

impl ScopeBinding {
    /// The binding every generated artifact needs: `React` for element
    /// creation and hooks.
    #[must_use]
    pub fn react() -> Self {
        Self {
            globals: vec!["React".to_string()],
        }
    }

    /// Names exposed to the artifact.
    #[must_use]
    pub fn globals(&self) -> &[String] {
        &self.globals
    }
}

/// One evaluation request for the sandbox collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// The artifact source
    pub code: OutputCode,
    /// Execution mode
    pub mode: EvalMode,
    /// Scope binding
    pub scope: ScopeBinding,
}

impl RenderRequest {
    /// Request evaluation of `code` with the standard mode and scope.
    #[must_use]
    pub fn new(code: OutputCode) -> Self {
        Self {
            code,
            mode: EvalMode::ExplicitRender,
            scope: ScopeBinding::react(),
        }
    }
}
