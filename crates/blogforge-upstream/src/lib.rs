//! # Blogforge Upstream
//!
//! Repository layer: the HTTP client for the hosted chat-completion
//! endpoint.
//!
//! This crate owns the wire contract with the model provider and the
//! translation of upstream outcomes into the domain error taxonomy.
//! Nothing above this layer sees provider-specific shapes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod prompts;

// Re-export main types
pub use client::{ChatCompletionClient, UpstreamConfig};
