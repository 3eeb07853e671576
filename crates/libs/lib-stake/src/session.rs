//! # Stake Session
//!
//! [`StakeSession`] owns all mutable state of the staking form (amount fields,
//! destination address, submission outcome) and is changed only through its methods.
//! The wallet connection and sign session live outside it because other parts of
//! the page share them; they are passed in where a decision depends on them.

use shared::dto::stake::StakeOrder;

use crate::address::{AddressResolver, ResolveInputs, ResolveTicket};
use crate::amount::{AmountForm, AmountState};
use crate::client::StakingClient;
use crate::config::StakeConfig;
use crate::error::{ClientError, Precondition, Result, StakeError};
use crate::submission::{can_submit, StakeSubmission, SubmissionState};
use crate::wallet::ConnectionState;

/// State of one staking form.
#[derive(Debug, Clone, PartialEq)]
pub struct StakeSession {
    form: AmountForm,
    amount: AmountState,
    resolver: AddressResolver,
    submission: StakeSubmission,
}

impl StakeSession {
    pub fn new(config: &StakeConfig) -> Self {
        Self {
            form: AmountForm::new(config),
            amount: AmountState::default(),
            resolver: AddressResolver::new(),
            submission: StakeSubmission::new(config),
        }
    }

    pub fn amount(&self) -> &AmountState {
        &self.amount
    }

    pub fn address(&self) -> &str {
        self.resolver.address()
    }

    pub fn address_error(&self) -> Option<&StakeError> {
        self.resolver.error()
    }

    /// An address fetch is outstanding.
    pub fn is_resolving_address(&self) -> bool {
        self.resolver.is_resolving()
    }

    pub fn submission(&self) -> &SubmissionState {
        self.submission.state()
    }

    /// Token input changed.
    pub fn set_token_amount(&mut self, raw: &str) {
        self.amount = self.form.set_token_amount(raw);
    }

    /// Address input changed.
    pub fn set_address(&mut self, raw: &str) {
        self.resolver.set_address(raw);
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self, connection: &ConnectionState) -> bool {
        can_submit(connection, self.submission.state())
    }

    /// Feed the resolution inputs; returns a ticket when an address fetch should start.
    pub fn observe_inputs(&mut self, client_present: bool, signed: bool) -> Option<ResolveTicket> {
        self.resolver.observe(ResolveInputs::new(client_present, signed))
    }

    pub fn complete_resolution(
        &mut self,
        ticket: ResolveTicket,
        result: std::result::Result<String, ClientError>,
    ) -> Result<bool> {
        self.resolver.complete(ticket, result)
    }

    /// Validate the form and enter `Loading`; see [`StakeSubmission::begin`].
    pub fn begin_submission(&mut self, client_present: bool) -> Result<StakeOrder> {
        self.submission
            .begin(client_present, &self.amount, self.resolver.address())
    }

    pub fn finish_submission(&mut self, result: std::result::Result<(), ClientError>) -> Result<()> {
        self.submission.finish(&mut self.amount, result)
    }

    /// Resolve the destination address if the inputs changed and allow it.
    ///
    /// Returns `Ok(false)` when no fetch was needed.
    pub async fn resolve_address<C>(&mut self, client: Option<&C>, signed: bool) -> Result<bool>
    where
        C: StakingClient + ?Sized,
    {
        let Some(ticket) = self.observe_inputs(client.is_some(), signed) else {
            return Ok(false);
        };
        let Some(client) = client else {
            return Ok(false);
        };
        let result = client.get_address().await;
        self.complete_resolution(ticket, result)
    }

    /// Submit the form: one stake call, no retry.
    pub async fn submit<C>(&mut self, client: Option<&C>) -> Result<()>
    where
        C: StakingClient + ?Sized,
    {
        let Some(client) = client else {
            return Err(StakeError::NotReady(Precondition::ClientMissing));
        };
        let order = self.begin_submission(true)?;
        let result = client.stake(&order).await;
        self.finish_submission(result)
    }
}
