//! Session state container
//!
//! Named fields with pure transition methods invoked at well-defined action
//! points (submit, success, failure, copy). No cross-cutting mutation: every
//! change to the session goes through one of the transitions below, and the
//! busy flag is only ever held across exactly one transport call plus one
//! pipeline run.

use lcg_pipeline::OutputCode;

/// Answer from the submit gate. Refusals are terminal for the action:
/// nothing is queued or retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    /// Generation may proceed; the busy flag is now held
    Ready,
    /// A generation is already in flight
    Busy,
    /// Prompt is blank; there is nothing to send
    EmptyPrompt,
}

/// Explicit container for everything the calling layer tracks across one
/// session: the prompt, the last artifact, the last raw text for verbatim
/// export, the busy flag, and the copy confirmation flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    prompt: String,
    output: Option<OutputCode>,
    raw_export: Option<String>,
    busy: bool,
    copy_confirmed: bool,
}

impl SessionState {
    /// Fresh session with nothing generated yet.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending prompt.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Ask to start a generation action.
    ///
    /// Refuses (does not queue) while a previous action holds the busy flag
    /// or while the prompt is blank. On `Ready` the busy flag is taken and
    /// any stale copy confirmation is cleared.
    pub fn begin(&mut self) -> SubmitGate {
        if self.busy {
            return SubmitGate::Busy;
        }
        if self.prompt.trim().is_empty() {
            return SubmitGate::EmptyPrompt;
        }
        self.busy = true;
        self.copy_confirmed = false;
        SubmitGate::Ready
    }

    /// Record a completed generation: the artifact plus the trimmed raw
    /// text kept for verbatim export. Releases the busy flag.
    pub fn complete(&mut self, output: OutputCode, raw_export: String) {
        self.output = Some(output);
        self.raw_export = Some(raw_export);
        self.busy = false;
    }

    /// Record a failed generation. The artifact is the transport-failure
    /// notice; the previous raw export (if any) is left in place, matching
    /// what a user would still want to copy. Releases the busy flag.
    pub fn fail(&mut self, output: OutputCode) {
        self.output = Some(output);
        self.busy = false;
    }

    /// Note that the raw export was copied out.
    pub fn mark_copied(&mut self) {
        if self.raw_export.is_some() {
            self.copy_confirmed = true;
        }
    }

    /// Clear the copy confirmation (e.g. after the UI's timeout).
    pub fn clear_copied(&mut self) {
        self.copy_confirmed = false;
    }

    /// The pending prompt.
    #[inline]
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The last artifact, if any generation has run.
    #[inline]
    #[must_use]
    pub fn output(&self) -> Option<&OutputCode> {
        self.output.as_ref()
    }

    /// The last raw model text, trimmed, for verbatim export.
    #[inline]
    #[must_use]
    pub fn raw_export(&self) -> Option<&str> {
        self.raw_export.as_deref()
    }

    /// Whether a generation action is in flight.
    #[inline]
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the last copy action was confirmed.
    #[inline]
    #[must_use]
    pub fn copy_confirmed(&self) -> bool {
        self.copy_confirmed
    }
}
