//! # Blogforge SDK
//!
//! Client adapter for the blogforge gateway API.
//!
//! Mirrors the server's prompt bounds client-side to fail fast without
//! a round trip, parses response bodies defensively, and normalizes
//! server error envelopes into a single [`Error`] shape a UI can
//! consume. The [`GenerationState`] machine captures the
//! idle/loading/success/error lifecycle a front-end drives.
//!
//! # Example
//!
//! ```rust,no_run
//! use blogforge_sdk::BlogClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), blogforge_sdk::Error> {
//!     let client = BlogClient::builder()
//!         .base_url("http://localhost:5000")
//!         .build()?;
//!
//!     let result = client.generate("The Future of Artificial Intelligence").await?;
//!     println!("{}", result.blog);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod state;

// Re-export main types
pub use client::{BlogClient, ClientBuilder, ReadinessSnapshot, ServiceHealth};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use state::GenerationState;

// Re-export the result types callers receive
pub use blogforge_core::{GenerationMeta, GenerationResult};
