//! Generation session orchestrator
//!
//! Owns the transport collaborator and the session state, and runs exactly
//! one transport call plus one pipeline run per accepted submit. All
//! asynchrony and all concurrency-hazard mitigation live here; the pipeline
//! core stays pure and synchronous.

use crate::render::RenderRequest;
use crate::state::{SessionState, SubmitGate};
use lcg_pipeline::{fallback, process, FallbackReason, RawResponse};
use lcg_transport::GenerationTransport;

/// Result of one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The submit gate refused; no request was made
    Refused(SubmitGate),
    /// One artifact was produced (wrapped model output or a notice)
    Rendered(RenderRequest),
}

/// One user-facing generation session.
#[derive(Debug)]
pub struct Session<T: GenerationTransport> {
    transport: T,
    state: SessionState,
}

impl<T: GenerationTransport> Session<T> {
    /// New session over `transport`.
    #[inline]
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: SessionState::new(),
        }
    }

    /// Current session state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replace the pending prompt.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.state.set_prompt(prompt);
    }

    /// Run one generation action for the pending prompt.
    ///
    /// Holds the busy flag for the duration of the transport call and the
    /// pipeline run. A transport error never reaches the pipeline: the
    /// transport-failure notice is substituted directly. Exception-free
    /// toward the caller; a gate refusal is a state answer, not an error.
    pub async fn generate(&mut self) -> GenerateOutcome {
        match self.state.begin() {
            SubmitGate::Ready => {}
            refused => {
                tracing::debug!(?refused, "generation refused");
                return GenerateOutcome::Refused(refused);
            }
        }

        let prompt = self.state.prompt().to_string();
        tracing::info!("generating component");

        let code = match self.transport.generate(&prompt).await {
            Ok(text) => {
                let code = process(&RawResponse::from_text(text.clone()));
                self.state.complete(code.clone(), text.trim().to_string());
                code
            }
            Err(e) => {
                tracing::error!("generation transport failed: {e}");
                let code = fallback(FallbackReason::TransportFailure);
                self.state.fail(code.clone());
                code
            }
        };

        GenerateOutcome::Rendered(RenderRequest::new(code))
    }

    /// The last raw model text for verbatim export, marking the copy
    /// confirmation when something was there to copy.
    pub fn copy_raw(&mut self) -> Option<String> {
        let raw = self.state.raw_export().map(str::to_string);
        if raw.is_some() {
            self.state.mark_copied();
        }
        raw
    }

    /// Clear the copy confirmation (UI timeout hook).
    pub fn clear_copied(&mut self) {
        self.state.clear_copied();
    }
}
