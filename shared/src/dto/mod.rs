//! # Boundary DTOs
//!
//! Data passed across the wasm-bindgen boundary. The web crate converts these to and
//! from `JsValue` with `serde-wasm-bindgen`; the state crate only sees the Rust types.
//!
//! - [`stake`] - stake order submitted to the staking client
//! - [`wallet`] - responses produced by the browser wallet
//!
//! ```text
//! stake order -> { "assetId": "ethereum_localnet:WBTC", "amountIn": 100000000, "amountOut": 90000000 }
//! connect     <- { "address": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed" }
//! sign        <- { "signature": "0x..." }
//! ```

pub mod stake;
pub mod wallet;

pub use stake::*;
pub use wallet::*;
