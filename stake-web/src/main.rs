//! Staking form for MetaMask users
//!
//! Connects MetaMask, signs a session message and submits stake orders through the
//! staking client the page's SDK provides. Form state lives in `lib-stake`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    // Environment overrides only exist in native builds; the browser keeps defaults
    if let Err(err) = lib_stake::config::init_config() {
        log::error!("Invalid staking configuration, using defaults: {}", err);
    }
    let config = lib_stake::config::stake_config();
    log::info!(
        "Staking app starting (asset {}, rate {}, {} decimals)",
        config.asset_id,
        config.rate,
        config.decimals
    );

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the `leptos-loading` placeholder from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };
    let Some(loading_element) = document.get_element_by_id("leptos-loading") else {
        return;
    };
    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to hide loading screen: {:?}", e);
        }
    }
    let _ = loading_element.set_attribute("style", "display: none !important;");
}
