//! # Test Fakes
//!
//! In-memory wallet and staking client that record calls and return scripted results.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use lib_stake::{ClientError, StakeConfig, StakingClient, WalletProvider};
use shared::dto::stake::StakeOrder;
use shared::dto::wallet::{ConnectResponse, SignResponse};

pub const ACCOUNT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const STAKE_ADDRESS: &str = "bcrt1q8c6fshw2dlwun7ekn9qwf37cu2rn755upcp6el";

/// Default configuration used by the flow tests
pub fn test_config() -> StakeConfig {
    StakeConfig::default()
}

/// Route tracing output through the test harness (`RUST_LOG=lib_stake=debug`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Staking client returning queued results; `Ok` once the queues are empty.
#[derive(Default)]
pub struct FakeStakingClient {
    pub stake_calls: RefCell<Vec<StakeOrder>>,
    pub address_calls: Cell<usize>,
    stake_results: RefCell<VecDeque<Result<(), ClientError>>>,
    address_results: RefCell<VecDeque<Result<String, ClientError>>>,
}

impl FakeStakingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_stake(err: ClientError) -> Self {
        let client = Self::new();
        client.stake_results.borrow_mut().push_back(Err(err));
        client
    }

    pub fn push_address(&self, result: Result<String, ClientError>) {
        self.address_results.borrow_mut().push_back(result);
    }

    pub fn stake_count(&self) -> usize {
        self.stake_calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl StakingClient for FakeStakingClient {
    async fn get_address(&self) -> Result<String, ClientError> {
        self.address_calls.set(self.address_calls.get() + 1);
        self.address_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(STAKE_ADDRESS.to_string()))
    }

    async fn stake(&self, order: &StakeOrder) -> Result<(), ClientError> {
        self.stake_calls.borrow_mut().push(order.clone());
        self.stake_results.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

/// MetaMask stand-in.
pub struct FakeWallet {
    pub installed: bool,
    pub approve: bool,
    pub connected: Cell<bool>,
    pub signed_messages: RefCell<Vec<String>>,
}

impl FakeWallet {
    pub fn approving() -> Self {
        Self {
            installed: true,
            approve: true,
            connected: Cell::new(false),
            signed_messages: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            approve: false,
            ..Self::approving()
        }
    }

    pub fn missing() -> Self {
        Self {
            installed: false,
            ..Self::approving()
        }
    }

    /// Wallet that already granted the page access before load.
    pub fn already_connected() -> Self {
        let wallet = Self::approving();
        wallet.connected.set(true);
        wallet
    }
}

#[async_trait(?Send)]
impl WalletProvider for FakeWallet {
    async fn connect(&self) -> Result<ConnectResponse, ClientError> {
        if !self.installed {
            return Err(ClientError::Unavailable);
        }
        if !self.approve {
            return Err(ClientError::Rejected("User rejected the request.".to_string()));
        }
        self.connected.set(true);
        Ok(ConnectResponse {
            address: ACCOUNT.to_string(),
        })
    }

    fn is_connected(&self) -> bool {
        self.connected.get()
    }

    fn selected_address(&self) -> Option<String> {
        self.connected.get().then(|| ACCOUNT.to_string())
    }

    async fn sign_message(&self, message: &str) -> Result<SignResponse, ClientError> {
        if !self.connected.get() {
            return Err(ClientError::NotConnected);
        }
        if !self.approve {
            return Err(ClientError::Rejected("User denied message signature.".to_string()));
        }
        self.signed_messages.borrow_mut().push(message.to_string());
        Ok(SignResponse {
            signature: format!("0xsig:{}", message.len()),
        })
    }
}
