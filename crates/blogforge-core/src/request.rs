//! Inbound request types.

use serde::{Deserialize, Serialize};

/// Body of a generation request.
///
/// After sanitization the prompt must be 3 to 500 characters with no
/// ASCII control characters; the service layer enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The blog topic supplied by the user.
    pub prompt: String,
}
