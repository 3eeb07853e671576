use serde::{Deserialize, Serialize};

/// A stake request in the staking client's fixed-point units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StakeOrder {
    pub asset_id: String,
    /// Amount of the staked token, scaled by `10^decimals`
    pub amount_in: u64,
    /// Amount received for the stake, scaled by `10^decimals`
    pub amount_out: u64,
}

impl StakeOrder {
    pub fn new(asset_id: impl Into<String>, amount_in: u64, amount_out: u64) -> Self {
        Self {
            asset_id: asset_id.into(),
            amount_in,
            amount_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stake_order_wire_names() {
        let order = StakeOrder::new("ethereum_localnet:WBTC", 100_000_000, 90_000_000);
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["assetId"], "ethereum_localnet:WBTC");
        assert_eq!(value["amountIn"], 100_000_000u64);
        assert_eq!(value["amountOut"], 90_000_000u64);
    }
}
