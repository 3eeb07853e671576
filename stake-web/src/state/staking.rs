//! Staking form state
//!
//! Holds the [`StakeSession`] in a signal and wires it to the page's staking client:
//! detection of the SDK, address resolution when the sign session completes, and
//! the submit flow.

use leptos::prelude::*;
use lib_stake::{
    config::stake_config, ClientError, ConnectionState, StakeError, StakeSession, StakingClient, SubmissionState,
};

use crate::services::GardenStaking;
use crate::state::wallet::WalletContext;
use crate::utils::constants::CLIENT_POLL_INTERVAL_MS;

#[derive(Clone, Copy)]
pub struct StakingContext {
    pub session: RwSignal<StakeSession>,
    /// Whether the staking client has been set up by the SDK.
    pub client_present: RwSignal<bool>,
}

impl StakingContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(StakeSession::new(stake_config())),
            client_present: RwSignal::new(GardenStaking::detect().is_some()),
        }
    }

    /// Poll until the SDK exposes its staking client.
    pub fn watch_client(&self) {
        if self.client_present.get_untracked() {
            return;
        }
        let client_present = self.client_present;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(CLIENT_POLL_INTERVAL_MS).await;
                if GardenStaking::detect().is_some() {
                    log::info!("Staking client available");
                    client_present.set(true);
                    break;
                }
            }
        });
    }

    /// Fetch the destination address whenever `(client present, signed)` changes to ready.
    pub fn resolve_address_on_sign(&self, wallet: WalletContext) {
        let ctx = *self;
        Effect::new(move |_| {
            let client_present = ctx.client_present.get();
            let signed = wallet.session.with(|s| s.is_signed());
            let Some(ticket) = ctx
                .session
                .try_update(|s| s.observe_inputs(client_present, signed))
                .flatten()
            else {
                return;
            };
            let Some(client) = GardenStaking::detect() else {
                // client went away since the last poll; release the ticket
                let _ = ctx
                    .session
                    .try_update(|s| s.complete_resolution(ticket, Err(ClientError::Unavailable)));
                ctx.client_present.set(false);
                ctx.watch_client();
                return;
            };
            leptos::task::spawn_local(async move {
                let result = client.get_address().await;
                match ctx.session.try_update(|s| s.complete_resolution(ticket, result)) {
                    Some(Ok(false)) => log::debug!("Ignored stale staking address"),
                    Some(Err(err)) => log::error!("Error fetching staking address: {}", err),
                    _ => {}
                }
            });
        });
    }

    pub fn set_token_amount(&self, raw: &str) {
        self.session.update(|s| s.set_token_amount(raw));
    }

    pub fn set_address(&self, raw: &str) {
        self.session.update(|s| s.set_address(raw));
    }

    pub fn submission(&self) -> SubmissionState {
        self.session.with(|s| s.submission().clone())
    }

    pub fn can_submit(&self, connection: &ConnectionState) -> bool {
        self.session.with(|s| s.can_submit(connection))
    }

    /// Submit the form: one stake call per click, no retry.
    pub fn submit(&self) {
        let client = GardenStaking::detect();
        let begun = self.session.try_update(|s| s.begin_submission(client.is_some()));
        let order = match begun {
            Some(Ok(order)) => order,
            Some(Err(StakeError::InvalidAmount)) => {
                log::error!("Invalid amount values");
                return;
            }
            Some(Err(err)) => {
                log::debug!("Stake not submitted: {}", err);
                return;
            }
            None => return,
        };
        let Some(client) = client else {
            return;
        };

        let session = self.session;
        leptos::task::spawn_local(async move {
            let result = client.stake(&order).await;
            if let Some(Err(err)) = session.try_update(|s| s.finish_submission(result)) {
                log::error!("Error staking tokens: {}", err);
            }
        });
    }
}

pub fn provide_staking_context() -> StakingContext {
    let context = StakingContext::new();
    provide_context(context);
    context.watch_client();
    context
}

pub fn use_staking_context() -> StakingContext {
    expect_context::<StakingContext>()
}
