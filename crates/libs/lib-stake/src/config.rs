//! # Staking Configuration
//!
//! Parameters of the staking form, loaded from environment variables with defaults.
//! Values are validated on load so a bad setting fails at startup instead of at the
//! first submission.
//!
//! | Field | Variable | Default |
//! |---|---|---|
//! | `rate` | `STAKE_RATE` | `0.9` |
//! | `decimals` | `STAKE_DECIMALS` | `8` |
//! | `asset_id` | `STAKE_ASSET_ID` | `ethereum_localnet:WBTC` |
//! | `sign_message` | `STAKE_SIGN_MESSAGE` | `Sign in to stake` |
//!
//! In the browser there is no process environment, so every lookup misses and the
//! defaults apply.
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use lib_stake::config::{init_config, stake_config};
//!
//! init_config().expect("invalid staking configuration");
//! let config = stake_config();
//! assert_eq!(config.decimals, 8);
//! ```

use std::env;
use std::sync::OnceLock;

use crate::error::{Result, StakeError};

pub const DEFAULT_RATE: f64 = 0.9;
pub const DEFAULT_DECIMALS: u32 = 8;
pub const DEFAULT_ASSET_ID: &str = "ethereum_localnet:WBTC";
pub const DEFAULT_SIGN_MESSAGE: &str = "Sign in to stake";

/// Largest supported precision; `10^18` still scales small amounts into a `u64`.
pub const MAX_DECIMALS: u32 = 18;

/// Staking form configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct StakeConfig {
    /// Multiplier from the entered token amount to the staked amount
    pub rate: f64,

    /// Decimal places of the derived amount, and the fixed-point exponent used
    /// when handing amounts to the staking client (`10^decimals` units per token)
    pub decimals: u32,

    /// Asset identifier passed to the staking client
    pub asset_id: String,

    /// Message the wallet signs to open a sign session
    pub sign_message: String,
}

impl Default for StakeConfig {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            decimals: DEFAULT_DECIMALS,
            asset_id: DEFAULT_ASSET_ID.to_string(),
            sign_message: DEFAULT_SIGN_MESSAGE.to_string(),
        }
    }
}

impl StakeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    ///
    /// Missing keys take their default; present keys must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let rate = match lookup("STAKE_RATE") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|e| StakeError::Config(format!("STAKE_RATE must be a number: {}", e)))?,
            None => defaults.rate,
        };

        let decimals = match lookup("STAKE_DECIMALS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                StakeError::Config(format!("STAKE_DECIMALS must be a whole number: {}", e))
            })?,
            None => defaults.decimals,
        };

        let asset_id = lookup("STAKE_ASSET_ID").unwrap_or(defaults.asset_id);
        let sign_message = lookup("STAKE_SIGN_MESSAGE").unwrap_or(defaults.sign_message);

        Ok(Self {
            rate,
            decimals,
            asset_id,
            sign_message,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(StakeError::Config(format!(
                "STAKE_RATE must be a positive number, got {}",
                self.rate
            )));
        }

        if self.decimals == 0 || self.decimals > MAX_DECIMALS {
            return Err(StakeError::Config(format!(
                "STAKE_DECIMALS must be between 1 and {}, got {}",
                MAX_DECIMALS, self.decimals
            )));
        }

        if self.asset_id.trim().is_empty() {
            return Err(StakeError::Config("STAKE_ASSET_ID must not be empty".to_string()));
        }

        if self.sign_message.trim().is_empty() {
            return Err(StakeError::Config("STAKE_SIGN_MESSAGE must not be empty".to_string()));
        }

        Ok(())
    }

    /// Fixed-point units per whole token (`10^decimals`).
    pub fn scale(&self) -> f64 {
        10f64.powi(self.decimals as i32)
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<StakeConfig> = OnceLock::new();

/// Load, validate and install the global configuration.
///
/// # Errors
///
/// Returns an error if a variable does not parse, validation fails, or the
/// configuration was already initialized (including implicitly by [`stake_config`]).
pub fn init_config() -> Result<()> {
    let config = StakeConfig::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| StakeError::Config("configuration has already been initialized".to_string()))
}

/// The global configuration; defaults if [`init_config`] was never called.
pub fn stake_config() -> &'static StakeConfig {
    CONFIG.get_or_init(StakeConfig::default)
}
