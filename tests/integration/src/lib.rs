//! Integration tests for the blogforge gateway.
//!
//! The full router runs in-process against a wiremock-simulated
//! upstream, so every layer from middleware to the repository's wire
//! contract is exercised exactly as in production, minus the network.

pub mod helpers;

#[cfg(test)]
mod e2e_tests;
#[cfg(test)]
mod sdk_tests;
