//! # Wallet Connection and Sign Session
//!
//! [`WalletConnector`] tracks the browser wallet connection; [`SignSession`] tracks the
//! one-time authentication signature that must exist before the staking client may
//! be asked for an address.
//!
//! Both expose a two-step form (`begin_*` / `finish_*`) for callers that run the
//! external call themselves (the Leptos front-end spawns it on the page's executor),
//! and an `async` convenience that does the whole round trip.

use shared::dto::wallet::{ConnectResponse, SignResponse};
use tracing::{debug, info, warn};

use crate::client::WalletProvider;
use crate::error::{ClientError, Result, StakeError};

/// Wallet connection state with the connected account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected { address: String },
    Error(String),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, ConnectionState::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected { address } => Some(address),
            _ => None,
        }
    }
}

/// Drives [`ConnectionState`] through the wallet's connect flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletConnector {
    state: ConnectionState,
}

impl WalletConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    /// Text of the connect button.
    pub fn button_label(&self) -> &'static str {
        match self.state {
            ConnectionState::Connected { .. } => "Connected",
            ConnectionState::Connecting => "Connecting...",
            _ => "Connect Metamask",
        }
    }

    /// Enter `Connecting`. Returns `false` if a connection attempt is already running.
    pub fn begin_connect(&mut self) -> bool {
        if self.state.is_connecting() {
            debug!("connect requested while already connecting");
            return false;
        }
        self.state = ConnectionState::Connecting;
        true
    }

    /// Record the outcome of the wallet's connect flow.
    pub fn finish_connect(&mut self, result: std::result::Result<ConnectResponse, ClientError>) -> Result<String> {
        match result {
            Ok(ConnectResponse { address }) => {
                info!(%address, "wallet connected");
                self.state = ConnectionState::Connected {
                    address: address.clone(),
                };
                Ok(address)
            }
            Err(err) => {
                warn!(error = %err, "wallet connection failed");
                self.state = ConnectionState::Error(err.to_string());
                Err(StakeError::Wallet(err))
            }
        }
    }

    /// Run the wallet's connect flow.
    pub async fn connect<W>(&mut self, wallet: &W) -> Result<String>
    where
        W: WalletProvider + ?Sized,
    {
        if !self.begin_connect() {
            return Err(StakeError::Busy);
        }
        let result = wallet.connect().await;
        self.finish_connect(result)
    }

    /// Pick up a connection the wallet already granted (page reload).
    ///
    /// Only moves `Disconnected` to `Connected`; the wallet is not prompted.
    pub fn restore<W>(&mut self, wallet: &W) -> bool
    where
        W: WalletProvider + ?Sized,
    {
        if self.state != ConnectionState::Disconnected || !wallet.is_connected() {
            return false;
        }
        match wallet.selected_address() {
            Some(address) => {
                debug!(%address, "restored wallet connection");
                self.state = ConnectionState::Connected { address };
                true
            }
            None => false,
        }
    }
}

/// One-time authentication signature gating address resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignSession {
    signature: Option<String>,
    pending: bool,
}

impl SignSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start signing. Returns `Ok(false)` when already signed or already signing.
    pub fn begin(&mut self, connection: &ConnectionState) -> Result<bool> {
        if self.is_signed() || self.pending {
            return Ok(false);
        }
        if !connection.is_connected() {
            return Err(StakeError::Wallet(ClientError::NotConnected));
        }
        self.pending = true;
        Ok(true)
    }

    /// Record the wallet's signing outcome.
    pub fn finish(&mut self, result: std::result::Result<SignResponse, ClientError>) -> Result<()> {
        self.pending = false;
        match result {
            Ok(SignResponse { signature }) => {
                info!("sign session completed");
                self.signature = Some(signature);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "sign session failed");
                Err(StakeError::Wallet(err))
            }
        }
    }

    /// Ask the wallet to sign `message`; no-op once signed.
    pub async fn authenticate<W>(&mut self, wallet: &W, connection: &ConnectionState, message: &str) -> Result<()>
    where
        W: WalletProvider + ?Sized,
    {
        if !self.begin(connection)? {
            return Ok(());
        }
        let result = wallet.sign_message(message).await;
        self.finish(result)
    }
}
