//! # Error Types
//!
//! Two layers of errors:
//!
//! - [`ClientError`]: a failure reported by an external collaborator (the browser
//!   wallet or the staking client). Its text is logged, never shown to the user.
//! - [`StakeError`]: everything that can go wrong in one staking interaction. Each
//!   variant is scoped to a single attempt; none of them poison the form state.
//!
//! ```rust
//! use lib_stake::error::{ClientError, StakeError};
//!
//! let err = StakeError::Submission(ClientError::Rejected("user denied".to_string()));
//! assert_eq!(err.user_message(), "Failed to stake tokens. Please try again.");
//! assert_eq!(err.to_string(), "Stake submission failed: call rejected: user denied");
//! ```

use std::fmt;
use thiserror::Error;

/// Message shown when the amount fields do not parse at submission time.
pub const INVALID_AMOUNT_MESSAGE: &str = "Invalid amount values.";

/// Message shown when the staking client rejects a submission.
pub const STAKE_FAILURE_MESSAGE: &str = "Failed to stake tokens. Please try again.";

/// Message shown when the destination address could not be fetched.
pub const ADDRESS_FAILURE_MESSAGE: &str = "Could not fetch the staking address. Enter it manually.";

/// Failure reported across the wallet / staking client boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No wallet extension or staking SDK is loaded in the page.
    #[error("provider not available")]
    Unavailable,

    /// The operation needs a connected wallet.
    #[error("wallet is not connected")]
    NotConnected,

    /// The external call rejected (user denial, RPC failure, SDK exception).
    #[error("call rejected: {0}")]
    Rejected(String),

    /// The call resolved with a value of the wrong shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Submission precondition that was not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    ClientMissing,
    AmountMissing,
    AddressMissing,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::ClientMissing => write!(f, "staking client not loaded"),
            Precondition::AmountMissing => write!(f, "amount not entered"),
            Precondition::AddressMissing => write!(f, "destination address empty"),
        }
    }
}

/// Error for a single staking interaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StakeError {
    /// Amount fields failed to parse (or to scale) at submission time.
    #[error("{}", INVALID_AMOUNT_MESSAGE)]
    InvalidAmount,

    /// A precondition for submitting is missing; nothing was changed.
    #[error("Not ready to stake: {0}")]
    NotReady(Precondition),

    /// A submission is already in flight.
    #[error("A stake submission is already in progress")]
    Busy,

    /// The staking client rejected the stake call.
    #[error("Stake submission failed: {0}")]
    Submission(#[source] ClientError),

    /// The staking client could not produce a destination address.
    #[error("Address resolution failed: {0}")]
    AddressResolution(#[source] ClientError),

    /// Connecting or signing with the wallet failed.
    #[error("Wallet error: {0}")]
    Wallet(#[source] ClientError),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StakeError {
    /// Text safe to render in the UI. Underlying client details are left out.
    pub fn user_message(&self) -> &'static str {
        match self {
            StakeError::InvalidAmount => INVALID_AMOUNT_MESSAGE,
            StakeError::NotReady(_) => "Enter an amount and a staking address.",
            StakeError::Busy => "Staking in progress...",
            StakeError::Submission(_) => STAKE_FAILURE_MESSAGE,
            StakeError::AddressResolution(_) => ADDRESS_FAILURE_MESSAGE,
            StakeError::Wallet(ClientError::Unavailable) => "MetaMask is not installed.",
            StakeError::Wallet(_) => "Wallet request failed. Please try again.",
            StakeError::Config(_) => "Staking is misconfigured.",
        }
    }
}

/// Convenience alias for `Result<T, StakeError>`.
pub type Result<T> = std::result::Result<T, StakeError>;
