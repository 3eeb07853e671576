//! JavaScript-backed implementations of the lib-stake boundary traits

pub mod metamask;
pub mod staking;

pub use metamask::MetaMaskWallet;
pub use staking::GardenStaking;

use wasm_bindgen::{JsCast, JsValue};

/// Readable text for a rejected JavaScript call.
///
/// `Error` objects yield their `message`; thrown strings are used as is.
pub(crate) fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
