//! Staking SDK integration via wasm-bindgen
//!
//! The order-book SDK is loaded by the page and exposes its staking client as
//! `window.gardenStaking` once it has been set up. The client derives the
//! destination address and builds, signs and submits the stake transaction.

use async_trait::async_trait;
use lib_stake::{ClientError, StakingClient};
use shared::dto::stake::StakeOrder;
use wasm_bindgen::prelude::*;

use super::js_error_message;

#[wasm_bindgen(inline_js = "
export function hasStakingClient() {
    return !!(window.gardenStaking
        && typeof window.gardenStaking.getAddress === 'function'
        && typeof window.gardenStaking.stake === 'function');
}

export async function stakingAddress() {
    const address = await window.gardenStaking.getAddress();
    if (typeof address !== 'string') {
        throw new Error('staking client returned a non-string address');
    }
    return address;
}

export async function stakingStake(order) {
    await window.gardenStaking.stake(order.assetId, order.amountIn, order.amountOut);
}
")]
extern "C" {
    fn hasStakingClient() -> bool;

    #[wasm_bindgen(catch)]
    async fn stakingAddress() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn stakingStake(order: JsValue) -> Result<JsValue, JsValue>;
}

/// Handle to the page's staking client. Only obtainable while the client is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GardenStaking {
    _loaded: (),
}

impl GardenStaking {
    /// The staking client, if the SDK has finished setting it up.
    pub fn detect() -> Option<Self> {
        hasStakingClient().then_some(Self { _loaded: () })
    }
}

#[async_trait(?Send)]
impl StakingClient for GardenStaking {
    async fn get_address(&self) -> Result<String, ClientError> {
        let value = stakingAddress()
            .await
            .map_err(|e| ClientError::Rejected(js_error_message(&e)))?;
        value
            .as_string()
            .ok_or_else(|| ClientError::InvalidResponse("address is not a string".to_string()))
    }

    async fn stake(&self, order: &StakeOrder) -> Result<(), ClientError> {
        // u64 amounts become JS numbers; anything above 2^53 fails to encode
        let order = serde_wasm_bindgen::to_value(order)
            .map_err(|e| ClientError::InvalidResponse(format!("cannot encode stake order: {}", e)))?;
        stakingStake(order)
            .await
            .map(|_| ())
            .map_err(|e| ClientError::Rejected(js_error_message(&e)))
    }
}
