//! MetaMask connect button

use leptos::prelude::*;
use shared::truncate_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let label = move || wallet_ctx.connector.with(|c| c.button_label());
    let connecting = move || wallet_ctx.connector.with(|c| c.state().is_connecting());
    // white while disconnected, black once connected
    let class = move || {
        if wallet_ctx.is_connected() {
            "btn btn-connected"
        } else {
            "btn btn-disconnected"
        }
    };

    view! {
        <div class="wallet-connect">
            <button
                class=class
                on:click=move |_| wallet_ctx.connect()
                disabled=connecting
            >
                {label}
            </button>
            {move || wallet_ctx.address().map(|address| view! {
                <span class="wallet-address" title=address.clone()>
                    {truncate_address(&address)}
                </span>
            })}
            {move || wallet_ctx.error.get().map(|err| view! {
                <span class="error">{err}</span>
            })}
        </div>
    }
}
