//! # Staking Form Core
//!
//! State and transitions of the staking form, independent of any UI framework or
//! JavaScript binding. The `stake-web` crate binds these types to Leptos signals; the
//! tests in this crate drive them with in-memory fakes.
//!
//! ## Flow
//!
//! ```text
//! WalletConnector ──connected──┐
//! SignSession ─────signed──────┼──▶ AddressResolver ──address──┐
//! StakingClient ───present─────┘                               │
//!                                                              ▼
//! AmountForm ──(token, staked)──────────────────────────▶ StakeSubmission ──▶ StakingClient::stake
//! ```
//!
//! ## Modules
//!
//! - **[`config`]**: rate, precision, asset id, sign message
//! - **[`error`]**: [`StakeError`] and [`ClientError`]
//! - **[`client`]**: the [`WalletProvider`] and [`StakingClient`] boundary traits
//! - **[`amount`]**: token input and derived staked amount
//! - **[`wallet`]**: wallet connection and sign session
//! - **[`address`]**: de-duplicated destination address resolution
//! - **[`submission`]**: submission state machine and submit gating
//! - **[`session`]**: [`StakeSession`], the single owner of the form's state
//!
//! ## Example
//!
//! ```rust,no_run
//! use lib_stake::{StakeConfig, StakeSession, StakingClient};
//!
//! async fn stake_one(client: &dyn StakingClient) -> lib_stake::Result<()> {
//!     let mut session = StakeSession::new(&StakeConfig::default());
//!     session.set_token_amount("1.0");
//!     session.set_address("bcrt1qstakeaddress");
//!     session.submit(Some(client)).await
//! }
//! ```

pub mod address;
pub mod amount;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod submission;
pub mod wallet;

pub use address::{AddressResolver, ResolveInputs, ResolveTicket};
pub use amount::{AmountForm, AmountState};
pub use client::{StakingClient, WalletProvider};
pub use config::StakeConfig;
pub use error::{ClientError, Precondition, Result, StakeError};
pub use session::StakeSession;
pub use submission::{can_submit, StakeSubmission, SubmissionState};
pub use wallet::{ConnectionState, SignSession, WalletConnector};
