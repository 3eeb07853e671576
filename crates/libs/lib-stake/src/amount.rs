//! # Amount Form
//!
//! The two amount fields of the staking form. The user edits only the token amount;
//! the staked amount is always derived from it:
//!
//! ```text
//! staked = round(token * rate, decimals)     when token parses to a number > 0
//! staked = absent                            otherwise
//! ```
//!
//! Rounding works on the exact value of the `f64` product, and a tie goes to the
//! larger neighbour: `0.01953125 * 0.9` is exactly `0.017578125` and derives
//! `0.01757813`.
//!
//! ```rust
//! use lib_stake::amount::AmountForm;
//! use lib_stake::config::StakeConfig;
//!
//! let form = AmountForm::new(&StakeConfig::default());
//! let state = form.set_token_amount("1.0");
//! assert_eq!(state.staked_amount.as_deref(), Some("0.90000000"));
//!
//! let state = form.set_token_amount("abc");
//! assert_eq!(state.token_amount.as_deref(), Some("abc"));
//! assert_eq!(state.staked_amount, None);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::StakeConfig;

/// Current contents of the amount fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountState {
    /// Raw text of the token input, kept verbatim
    pub token_amount: Option<String>,
    /// Derived staked amount; present only when the token amount is positive
    pub staked_amount: Option<String>,
}

impl AmountState {
    /// Both fields carry non-empty text.
    pub fn is_complete(&self) -> bool {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.token_amount) && filled(&self.staked_amount)
    }

    /// Reset both fields to absent.
    pub fn clear(&mut self) {
        self.token_amount = None;
        self.staked_amount = None;
    }
}

/// Derivation rule for the staked amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountForm {
    rate: f64,
    decimals: u32,
}

impl AmountForm {
    pub fn new(config: &StakeConfig) -> Self {
        Self {
            rate: config.rate,
            decimals: config.decimals,
        }
    }

    /// New field contents after the user typed `raw` into the token input.
    pub fn set_token_amount(&self, raw: &str) -> AmountState {
        let staked_amount = parse_amount(raw)
            .filter(|value| *value > 0.0)
            .and_then(|value| self.derive(value));

        AmountState {
            token_amount: Some(raw.to_string()),
            staked_amount,
        }
    }

    /// `None` when the product is outside the range of [`Decimal`].
    fn derive(&self, value: f64) -> Option<String> {
        let product = Decimal::from_f64_retain(value * self.rate)?;
        let rounded = product.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        Some(format!("{:.*}", self.decimals as usize, rounded))
    }
}

/// Parse a decimal amount the way the form does: surrounding whitespace is ignored,
/// and only finite numbers count.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
