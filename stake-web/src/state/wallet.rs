//! Wallet state management
//!
//! Connection and sign session are owned by lib-stake types; this module wraps them
//! in signals and drives their two-phase transitions from `spawn_local` tasks.

use leptos::prelude::*;
use lib_stake::{config::stake_config, ConnectionState, SignSession, WalletConnector, WalletProvider};

use crate::services::MetaMaskWallet;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub connector: RwSignal<WalletConnector>,
    pub session: RwSignal<SignSession>,
    /// Last wallet failure, shown under the connect button.
    pub error: RwSignal<Option<String>>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            connector: RwSignal::new(WalletConnector::new()),
            session: RwSignal::new(SignSession::new()),
            error: RwSignal::new(None),
        }
    }

    pub fn connection(&self) -> ConnectionState {
        self.connector.with(|c| c.state().clone())
    }

    pub fn is_connected(&self) -> bool {
        self.connector.with(|c| c.is_connected())
    }

    pub fn is_signed(&self) -> bool {
        self.session.with(|s| s.is_signed())
    }

    pub fn address(&self) -> Option<String> {
        self.connector.with(|c| c.state().address().map(str::to_string))
    }

    /// Pick up an account MetaMask already authorised for this page.
    pub fn restore(&self) {
        let wallet = MetaMaskWallet;
        if self.connector.try_update(|c| c.restore(&wallet)).unwrap_or(false) {
            log::info!("Restored MetaMask account {:?}", self.address());
        }
    }

    /// Ask MetaMask for account access. Ignored while a request is pending.
    pub fn connect(&self) {
        let started = self.connector.try_update(|c| c.begin_connect()).unwrap_or(false);
        if !started {
            return;
        }
        self.error.set(None);

        let ctx = *self;
        leptos::task::spawn_local(async move {
            let result = MetaMaskWallet.connect().await;
            let outcome = ctx.connector.try_update(|c| c.finish_connect(result));
            if let Some(Err(err)) = outcome {
                log::error!("Error connecting: {}", err);
                ctx.error.set(Some(err.user_message().to_string()));
            }
        });
    }

    /// Sign the session message once per page lifetime.
    pub fn authenticate(&self) {
        let connection = self.connection();
        let started = match self.session.try_update(|s| s.begin(&connection)) {
            Some(Ok(started)) => started,
            Some(Err(err)) => {
                log::warn!("Cannot sign in: {}", err);
                self.error.set(Some(err.user_message().to_string()));
                return;
            }
            None => return,
        };
        if !started {
            return;
        }
        self.error.set(None);

        let ctx = *self;
        leptos::task::spawn_local(async move {
            let message = stake_config().sign_message.clone();
            let result = MetaMaskWallet.sign_message(&message).await;
            let outcome = ctx.session.try_update(|s| s.finish(result));
            if let Some(Err(err)) = outcome {
                log::error!("Error signing session message: {}", err);
                ctx.error.set(Some(err.user_message().to_string()));
            }
        });
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
