//! Generation lifecycle state machine.
//!
//! The contract a front-end drives: `submit` enters `Loading`, a
//! resolved call moves `Loading` to `Success` or `Error`, and `reset`
//! returns to `Idle` from anywhere. Transitions not listed are no-ops,
//! so a late-resolving call cannot clobber a state the user already
//! left.

use blogforge_core::GenerationResult;

/// State of one generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// Nothing in flight, nothing displayed.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Success(GenerationResult),
    /// The last request failed.
    Error {
        /// Message to display.
        message: String,
    },
}

impl GenerationState {
    /// A submission was made; any prior state is discarded.
    #[must_use]
    pub fn submit(self) -> Self {
        Self::Loading
    }

    /// The in-flight request succeeded. No-op unless loading.
    #[must_use]
    pub fn succeed(self, result: GenerationResult) -> Self {
        match self {
            Self::Loading => Self::Success(result),
            other => other,
        }
    }

    /// The in-flight request failed. No-op unless loading.
    #[must_use]
    pub fn fail(self, message: impl Into<String>) -> Self {
        match self {
            Self::Loading => Self::Error {
                message: message.into(),
            },
            other => other,
        }
    }

    /// Reset to idle from any state.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::Idle
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
