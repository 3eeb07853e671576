//! MetaMask integration via wasm-bindgen
//!
//! Talks to the EIP-1193 provider MetaMask injects as `window.ethereum`.

use async_trait::async_trait;
use lib_stake::{ClientError, WalletProvider};
use shared::dto::wallet::{ConnectResponse, SignResponse};
use wasm_bindgen::prelude::*;

use super::js_error_message;

#[wasm_bindgen(inline_js = "
export function isMetaMaskInstalled() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export function selectedAccount() {
    if (!window.ethereum || !window.ethereum.selectedAddress) {
        return null;
    }
    return window.ethereum.selectedAddress;
}

export async function requestAccounts() {
    const accounts = await window.ethereum.request({ method: 'eth_requestAccounts' });
    if (!accounts || accounts.length === 0) {
        throw new Error('MetaMask returned no accounts');
    }
    return { address: accounts[0] };
}

export async function personalSign(message) {
    const accounts = await window.ethereum.request({ method: 'eth_accounts' });
    if (!accounts || accounts.length === 0) {
        throw new Error('MetaMask is locked');
    }
    const signature = await window.ethereum.request({
        method: 'personal_sign',
        params: [message, accounts[0]],
    });
    return { signature: signature };
}
")]
extern "C" {
    fn isMetaMaskInstalled() -> bool;

    fn selectedAccount() -> Option<String>;

    #[wasm_bindgen(catch)]
    async fn requestAccounts() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn personalSign(message: &str) -> Result<JsValue, JsValue>;
}

/// Handle to the injected MetaMask provider. Stateless; every call goes to `window.ethereum`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetaMaskWallet;

impl MetaMaskWallet {
    pub fn is_installed(&self) -> bool {
        isMetaMaskInstalled()
    }
}

#[async_trait(?Send)]
impl WalletProvider for MetaMaskWallet {
    async fn connect(&self) -> Result<ConnectResponse, ClientError> {
        if !self.is_installed() {
            return Err(ClientError::Unavailable);
        }
        let value = requestAccounts()
            .await
            .map_err(|e| ClientError::Rejected(js_error_message(&e)))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    fn is_connected(&self) -> bool {
        self.is_installed() && selectedAccount().is_some()
    }

    fn selected_address(&self) -> Option<String> {
        if !self.is_installed() {
            return None;
        }
        selectedAccount()
    }

    async fn sign_message(&self, message: &str) -> Result<SignResponse, ClientError> {
        if !self.is_installed() {
            return Err(ClientError::Unavailable);
        }
        let value = personalSign(message)
            .await
            .map_err(|e| ClientError::Rejected(js_error_message(&e)))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}
