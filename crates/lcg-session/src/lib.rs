//! LCG Session
//!
//! The calling layer around the pure pipeline: an explicit state container
//! with pure transitions, busy-flag gating of generation actions (refuse,
//! never queue), orchestration of one transport call plus one pipeline run,
//! the sandbox-facing render surface, and the verbatim raw export.
//!
//! # Example
//!
//! ```rust,ignore
//! use lcg_session::{GenerateOutcome, Session};
//! use lcg_transport::{GenerationClient, TransportConfig};
//!
//! # async fn example() -> Result<(), lcg_transport::TransportError> {
//! let client = GenerationClient::new(TransportConfig::new("api-key"))?;
//! let mut session = Session::new(client);
//! session.set_prompt("A login form with a sign in/sign up toggle");
//!
//! match session.generate().await {
//!     GenerateOutcome::Rendered(request) => println!("{}", request.code),
//!     GenerateOutcome::Refused(gate) => eprintln!("refused: {gate:?}"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod render;
pub mod session;
pub mod state;

// Re-exports
pub use render::{EvalMode, RenderRequest, ScopeBinding};
pub use session::{GenerateOutcome, Session};
pub use state::{SessionState, SubmitGate};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
