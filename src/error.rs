//! Error types for pagenav
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagenav
#[derive(Error, Debug)]
pub enum Error {
    /// The page window was configured with a non-positive item count.
    #[error("invalid page window: initial_num_items must be greater than zero")]
    InvalidWindow,

    /// An action was dispatched in a state that does not accept it.
    ///
    /// A correctly behaving caller can never trigger this: the view projector
    /// withholds navigation actions whenever they would be illegal.
    #[error("illegal pagination transition: {action} while {state}")]
    IllegalTransition {
        /// Name of the state the machine was in
        state: &'static str,
        /// Name of the offending action
        action: &'static str,
    },

    /// The subscription delivered a page that violates the pagination contract.
    #[error("malformed page snapshot: {message}")]
    MalformedPage {
        /// What the snapshot was missing
        message: String,
    },

    /// The subscription collaborator failed.
    #[error("subscription error: {message}")]
    Subscription {
        /// Description from the collaborator
        message: String,
    },

    /// Generic error with a plain message
    #[error("{0}")]
    Other(String),

    /// Arbitrary collaborator error, passed through unchanged
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an illegal transition error
    pub fn illegal_transition(state: &'static str, action: &'static str) -> Self {
        Self::IllegalTransition { state, action }
    }

    /// Create a malformed page error
    pub fn malformed_page(message: impl Into<String>) -> Self {
        Self::MalformedPage {
            message: message.into(),
        }
    }

    /// Create a subscription error
    pub fn subscription(message: impl Into<String>) -> Self {
        Self::Subscription {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Check if this error indicates a caller-side programming bug rather
    /// than a failure of the external source
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::InvalidWindow | Error::IllegalTransition { .. } | Error::MalformedPage { .. }
        )
    }
}

/// Result type alias for pagenav
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::illegal_transition("Skipped", "ResultsArrived");
        assert_eq!(
            err.to_string(),
            "illegal pagination transition: ResultsArrived while Skipped"
        );

        let err = Error::malformed_page("missing continuation cursor");
        assert_eq!(
            err.to_string(),
            "malformed page snapshot: missing continuation cursor"
        );

        let err = Error::InvalidWindow;
        assert_eq!(
            err.to_string(),
            "invalid page window: initial_num_items must be greater than zero"
        );
    }

    #[test]
    fn test_is_contract_violation() {
        assert!(Error::InvalidWindow.is_contract_violation());
        assert!(Error::illegal_transition("Loaded", "NextPageRequested").is_contract_violation());
        assert!(Error::malformed_page("x").is_contract_violation());

        assert!(!Error::subscription("network down").is_contract_violation());
        assert!(!Error::other("misc").is_contract_violation());
    }

    #[test]
    fn test_anyhow_passthrough() {
        let err: Error = anyhow::anyhow!("collaborator exploded").into();
        assert_eq!(err.to_string(), "collaborator exploded");
        assert!(!err.is_contract_violation());
    }
}
