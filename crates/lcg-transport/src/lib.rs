//! LCG Transport
//!
//! The generation transport collaborator: turns one user prompt into raw
//! model text over an OpenAI-compatible chat-completions API. The pipeline
//! core never sees this layer's errors; the caller maps every
//! `TransportError` to the transport-failure notice artifact.
//!
//! # Example
//!
//! ```rust,ignore
//! use lcg_transport::{GenerationClient, GenerationTransport, TransportConfig};
//!
//! # async fn example() -> Result<(), lcg_transport::TransportError> {
//! let client = GenerationClient::new(TransportConfig::new("api-key"))?;
//! let text = client.generate("A login form with a toggle").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod error;

// Re-exports
pub use client::{GenerationClient, GenerationTransport, TransportConfig};
pub use error::TransportError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
