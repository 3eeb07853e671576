//! # Stake Submission
//!
//! ```text
//!            begin()                finish(Ok)
//!   Idle ────────────▶ Loading ────────────────▶ Succeeded("Staking successful!")
//!    ▲                    │
//!    │                    │ finish(Err)
//!    │                    └─────────────────────▶ Failed("Failed to stake tokens. ...")
//!    │
//!    └── a terminal state is left by the next begin()
//!
//!   begin() with unparseable amounts ───────────▶ Failed("Invalid amount values.")
//! ```
//!
//! [`StakeSubmission::begin`] validates the form and produces the fixed-point
//! [`StakeOrder`]; the caller performs exactly one external stake call and feeds its
//! outcome to [`StakeSubmission::finish`]. While `Loading`, `begin` refuses with
//! [`StakeError::Busy`], so at most one submission is ever in flight.

use shared::dto::stake::StakeOrder;
use tracing::{debug, error, info};

use crate::amount::{parse_amount, AmountState};
use crate::config::StakeConfig;
use crate::error::{ClientError, Precondition, Result, StakeError, INVALID_AMOUNT_MESSAGE, STAKE_FAILURE_MESSAGE};
use crate::wallet::ConnectionState;

pub const STAKE_SUCCESS_MESSAGE: &str = "Staking successful!";
pub const LOADING_MESSAGE: &str = "Loading...";

/// Outcome of the latest submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded(message) => Some(message),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Status line rendered under the form; nothing while idle.
    pub fn status_text(&self) -> Option<&str> {
        match self {
            SubmissionState::Idle => None,
            SubmissionState::Loading => Some(LOADING_MESSAGE),
            SubmissionState::Succeeded(message) | SubmissionState::Failed(message) => Some(message),
        }
    }
}

/// The submit control is enabled only with a connected wallet and no submission in flight.
pub fn can_submit(connection: &ConnectionState, submission: &SubmissionState) -> bool {
    connection.is_connected() && !submission.is_loading()
}

/// Submission state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct StakeSubmission {
    asset_id: String,
    scale: f64,
    state: SubmissionState,
}

impl StakeSubmission {
    pub fn new(config: &StakeConfig) -> Self {
        Self {
            asset_id: config.asset_id.clone(),
            scale: config.scale(),
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Validate the form and enter `Loading`.
    ///
    /// Missing preconditions return [`StakeError::NotReady`] and leave the state
    /// untouched. Amounts that do not parse move to `Failed` without entering
    /// `Loading`.
    pub fn begin(&mut self, client_present: bool, amount: &AmountState, address: &str) -> Result<StakeOrder> {
        if self.state.is_loading() {
            return Err(StakeError::Busy);
        }

        let precondition = if !client_present {
            Some(Precondition::ClientMissing)
        } else if !amount.is_complete() {
            Some(Precondition::AmountMissing)
        } else if address.is_empty() {
            Some(Precondition::AddressMissing)
        } else {
            None
        };
        if let Some(precondition) = precondition {
            debug!(%precondition, "stake submission skipped");
            return Err(StakeError::NotReady(precondition));
        }

        let amounts = (
            amount.token_amount.as_deref().and_then(parse_amount),
            amount.staked_amount.as_deref().and_then(parse_amount),
        );
        let (amount_in, amount_out) = match amounts {
            (Some(token), Some(staked)) => match (self.to_fixed_point(token), self.to_fixed_point(staked)) {
                (Some(amount_in), Some(amount_out)) => (amount_in, amount_out),
                _ => return Err(self.reject_amounts(amount)),
            },
            _ => return Err(self.reject_amounts(amount)),
        };

        let order = StakeOrder::new(self.asset_id.clone(), amount_in, amount_out);
        info!(
            asset_id = %order.asset_id,
            amount_in = order.amount_in,
            amount_out = order.amount_out,
            "submitting stake"
        );
        self.state = SubmissionState::Loading;
        Ok(order)
    }

    /// Apply the stake call's outcome. On success the amount fields are cleared; on
    /// failure they are left as entered.
    pub fn finish(&mut self, amount: &mut AmountState, result: std::result::Result<(), ClientError>) -> Result<()> {
        match result {
            Ok(()) => {
                info!("stake submitted");
                self.state = SubmissionState::Succeeded(STAKE_SUCCESS_MESSAGE.to_string());
                amount.clear();
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to stake tokens");
                self.state = SubmissionState::Failed(STAKE_FAILURE_MESSAGE.to_string());
                Err(StakeError::Submission(err))
            }
        }
    }

    fn reject_amounts(&mut self, amount: &AmountState) -> StakeError {
        debug!(
            token_amount = ?amount.token_amount,
            staked_amount = ?amount.staked_amount,
            "rejecting unparseable amounts"
        );
        self.state = SubmissionState::Failed(INVALID_AMOUNT_MESSAGE.to_string());
        StakeError::InvalidAmount
    }

    /// `value * 10^decimals` rounded to whole units; `None` when it is negative or
    /// does not fit a `u64`.
    fn to_fixed_point(&self, value: f64) -> Option<u64> {
        let scaled = (value * self.scale).round();
        if scaled.is_finite() && scaled >= 0.0 && scaled < u64::MAX as f64 {
            Some(scaled as u64)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::AmountForm;

    fn submission() -> StakeSubmission {
        StakeSubmission::new(&StakeConfig::default())
    }

    fn amounts(token: &str, staked: &str) -> AmountState {
        AmountState {
            token_amount: Some(token.to_string()),
            staked_amount: Some(staked.to_string()),
        }
    }

    #[test]
    fn test_begin_scales_to_fixed_point() {
        let form = AmountForm::new(&StakeConfig::default());
        let mut submission = submission();

        let order = submission.begin(true, &form.set_token_amount("1.0"), "addr").unwrap();

        assert_eq!(order.amount_in, 100_000_000);
        assert_eq!(order.amount_out, 90_000_000);
        assert_eq!(order.asset_id, "ethereum_localnet:WBTC");
        assert!(submission.is_loading());
    }

    #[test]
    fn test_preconditions_leave_state_untouched() {
        let mut submission = submission();
        let complete = amounts("1", "0.9");

        assert_eq!(
            submission.begin(false, &complete, "addr"),
            Err(StakeError::NotReady(Precondition::ClientMissing))
        );
        assert_eq!(
            submission.begin(true, &AmountState::default(), "addr"),
            Err(StakeError::NotReady(Precondition::AmountMissing))
        );
        assert_eq!(
            submission.begin(true, &complete, ""),
            Err(StakeError::NotReady(Precondition::AddressMissing))
        );
        assert_eq!(submission.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_only_empty_address_is_missing() {
        let mut submission = submission();

        // the staking client validates the address itself
        let order = submission.begin(true, &amounts("1", "0.9"), " ");

        assert!(order.is_ok());
        assert!(submission.is_loading());
    }

    #[test]
    fn test_unparseable_amounts_fail_without_loading() {
        let mut submission = submission();
        let err = submission.begin(true, &amounts("abc", "0.9"), "addr").unwrap_err();

        assert_eq!(err, StakeError::InvalidAmount);
        assert_eq!(
            submission.state(),
            &SubmissionState::Failed("Invalid amount values.".to_string())
        );
    }

    #[test]
    fn test_unrepresentable_amounts_are_invalid() {
        let mut submission = submission();
        assert_eq!(
            submission.begin(true, &amounts("-1", "0.9"), "addr"),
            Err(StakeError::InvalidAmount)
        );
        assert_eq!(
            submission.begin(true, &amounts("1e300", "9e299"), "addr"),
            Err(StakeError::InvalidAmount)
        );
    }

    #[test]
    fn test_busy_while_loading() {
        let mut submission = submission();
        let complete = amounts("1", "0.9");
        submission.begin(true, &complete, "addr").unwrap();

        assert_eq!(submission.begin(true, &complete, "addr"), Err(StakeError::Busy));
        assert!(submission.is_loading());
    }

    #[test]
    fn test_finish_success_clears_form() {
        let mut submission = submission();
        let mut form = amounts("1", "0.90000000");
        submission.begin(true, &form, "addr").unwrap();

        submission.finish(&mut form, Ok(())).unwrap();

        assert_eq!(submission.state().success_message(), Some("Staking successful!"));
        assert_eq!(form, AmountState::default());
    }

    #[test]
    fn test_finish_failure_keeps_form() {
        let mut submission = submission();
        let mut form = amounts("1", "0.90000000");
        submission.begin(true, &form, "addr").unwrap();

        let err = submission
            .finish(&mut form, Err(ClientError::Rejected("insufficient funds".to_string())))
            .unwrap_err();

        assert!(matches!(err, StakeError::Submission(_)));
        assert_eq!(
            submission.state().error_message(),
            Some("Failed to stake tokens. Please try again.")
        );
        assert!(!submission.is_loading());
        assert_eq!(form, amounts("1", "0.90000000"));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(SubmissionState::Idle.status_text(), None);
        assert_eq!(SubmissionState::Loading.status_text(), Some("Loading..."));
        assert_eq!(
            SubmissionState::Failed("x".to_string()).status_text(),
            Some("x")
        );
    }

    #[test]
    fn test_can_submit() {
        let connected = ConnectionState::Connected {
            address: "0xabc".to_string(),
        };
        assert!(can_submit(&connected, &SubmissionState::Idle));
        assert!(can_submit(&connected, &SubmissionState::Failed("x".to_string())));
        assert!(!can_submit(&connected, &SubmissionState::Loading));
        assert!(!can_submit(&ConnectionState::Disconnected, &SubmissionState::Idle));
        assert!(!can_submit(&ConnectionState::Connecting, &SubmissionState::Idle));
    }
}
