//! # Boundary Traits
//!
//! The two external collaborators of the staking form, as traits so the flow can be
//! driven by the browser bindings in `stake-web` or by in-memory fakes in tests.
//!
//! Both traits are `?Send`: browser implementations hold JavaScript handles and
//! resolve JavaScript promises, which never leave the page's single thread.

use async_trait::async_trait;
use shared::dto::stake::StakeOrder;
use shared::dto::wallet::{ConnectResponse, SignResponse};

use crate::error::ClientError;

/// Browser wallet extension (MetaMask).
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Run the wallet's connection flow and return the connected account.
    async fn connect(&self) -> Result<ConnectResponse, ClientError>;

    /// Whether the wallet currently exposes an account to the page.
    fn is_connected(&self) -> bool;

    /// Account currently exposed to the page, if any.
    fn selected_address(&self) -> Option<String>;

    /// Ask the wallet to sign `message` with the connected account.
    async fn sign_message(&self, message: &str) -> Result<SignResponse, ClientError>;
}

/// Staking SDK client.
#[async_trait(?Send)]
pub trait StakingClient {
    /// Derive the destination address for the staked funds.
    async fn get_address(&self) -> Result<String, ClientError>;

    /// Submit a stake of `order.amount_in` for `order.amount_out`, both fixed-point.
    async fn stake(&self, order: &StakeOrder) -> Result<(), ClientError>;
}
