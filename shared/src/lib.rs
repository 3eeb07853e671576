//! # Shared Boundary Types
//!
//! Types that cross the boundary between the staking front-end and the JavaScript
//! collaborators it drives (the browser wallet and the staking SDK), plus small
//! display helpers used by both the state crate and the web crate.
//!
//! ## Structure
//!
//! - **[`dto`]**: serde types exchanged with the wallet provider and staking client
//!   - **[`dto::stake`]**: the fixed-point stake order
//!   - **[`dto::wallet`]**: wallet connect/sign responses
//! - **[`utils`]**: address formatting for display
//!
//! ## Wire Format
//!
//! Objects handed to or read from JavaScript use **camelCase** field names
//! (`#[serde(rename_all = "camelCase")]`), matching the SDK objects they mirror.
//!
//! ```rust
//! use shared::dto::stake::StakeOrder;
//!
//! let order = StakeOrder::new("ethereum_localnet:WBTC", 100_000_000, 90_000_000);
//! let json = serde_json::to_string(&order).unwrap();
//! assert!(json.contains("\"amountIn\":100000000"));
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
