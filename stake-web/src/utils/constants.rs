//! Application constants

/// How often to check whether the staking SDK has set up its client.
pub const CLIENT_POLL_INTERVAL_MS: u32 = 500;

pub const TOKEN_AMOUNT_LABEL: &str = "Token amount";
pub const STAKED_AMOUNT_LABEL: &str = "Staked amount";
pub const ADDRESS_LABEL: &str = "Staking address";
pub const AMOUNT_PLACEHOLDER: &str = "0";
