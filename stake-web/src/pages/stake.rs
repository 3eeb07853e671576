//! Staking page
//!
//! Sign-in with the connected wallet, the amount fields, the destination address and
//! the submit button. Amounts and address live in the [`StakingContext`]; the
//! address is filled in from the staking client once the session is signed.
//!
//! [`StakingContext`]: crate::state::staking::StakingContext

use leptos::prelude::*;

use crate::components::{AmountInput, StatusMessage};
use crate::state::staking::use_staking_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{ADDRESS_LABEL, STAKED_AMOUNT_LABEL, TOKEN_AMOUNT_LABEL};

#[component]
pub fn StakePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let staking_ctx = use_staking_context();

    staking_ctx.resolve_address_on_sign(wallet_ctx);

    let token_amount = Signal::derive(move || staking_ctx.session.with(|s| s.amount().token_amount.clone()));
    let staked_amount = Signal::derive(move || staking_ctx.session.with(|s| s.amount().staked_amount.clone()));
    let submission = Signal::derive(move || staking_ctx.submission());
    let address = move || staking_ctx.session.with(|s| s.address().to_string());
    let address_error = move || {
        staking_ctx
            .session
            .with(|s| s.address_error().map(|err| err.user_message()))
    };

    let submit_disabled = move || !staking_ctx.can_submit(&wallet_ctx.connection());
    let signing = move || wallet_ctx.session.with(|s| s.is_pending());

    view! {
        <div class="wallet-overlay">
            <div class="wallet-setup-card" style="max-width: 600px;">
                <h1>"Stake"</h1>

                {move || if !wallet_ctx.is_connected() {
                    view! {
                        <div class="info">
                            <p>"Connect MetaMask to stake."</p>
                        </div>
                    }.into_any()
                } else if !wallet_ctx.is_signed() {
                    view! {
                        <button
                            class="btn-secondary"
                            style="width: 100%; padding: 12px; margin-bottom: 16px;"
                            on:click=move |_| wallet_ctx.authenticate()
                            disabled=signing
                        >
                            {move || if signing() { "Signing..." } else { "Sign in" }}
                        </button>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || (!staking_ctx.client_present.get()).then(|| view! {
                    <p class="info" style="font-size: 0.9em;">"Waiting for the staking client..."</p>
                })}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    staking_ctx.submit();
                }>
                    <AmountInput
                        label=TOKEN_AMOUNT_LABEL
                        value=token_amount
                        on_input=Callback::new(move |raw: String| staking_ctx.set_token_amount(&raw))
                    />
                    <AmountInput label=STAKED_AMOUNT_LABEL value=staked_amount/>

                    <label class="form-field">
                        <span class="form-label">{ADDRESS_LABEL}</span>
                        <input
                            type="text"
                            class="form-input"
                            style="font-family: monospace;"
                            prop:value=address
                            on:input=move |ev| staking_ctx.set_address(&event_target_value(&ev))
                        />
                    </label>
                    {move || staking_ctx.session.with(|s| s.is_resolving_address()).then(|| view! {
                        <p class="info" style="font-size: 0.9em;">"Fetching staking address..."</p>
                    })}
                    {move || address_error().map(|message| view! {
                        <p class="error" style="font-size: 0.9em;">{message}</p>
                    })}

                    <button
                        type="submit"
                        class="btn"
                        style="width: 100%; padding: 16px; font-size: 1em; margin-top: 16px;"
                        disabled=submit_disabled
                    >
                        "Stake"
                    </button>
                </form>

                <StatusMessage state=submission/>
            </div>
        </div>
    }
}
