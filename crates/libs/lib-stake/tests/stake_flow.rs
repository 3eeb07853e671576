//! # Stake Flow Tests
//!
//! End-to-end submission through `StakeSession` with a fake staking client.

mod common;

use common::*;
use lib_stake::{
    ClientError, ConnectionState, Precondition, StakeError, StakeSession, StakingClient,
    SubmissionState,
};

fn ready_session() -> StakeSession {
    let mut session = StakeSession::new(&test_config());
    session.set_token_amount("1.0");
    session.set_address(STAKE_ADDRESS);
    session
}

#[tokio::test]
async fn test_submit_sends_fixed_point_amounts() {
    // Arrange
    init_tracing();
    let client = FakeStakingClient::new();
    let mut session = ready_session();
    assert_eq!(session.amount().staked_amount.as_deref(), Some("0.90000000"));

    // Act
    session.submit(Some(&client)).await.unwrap();

    // Assert
    let calls = client.stake_calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].asset_id, "ethereum_localnet:WBTC");
    assert_eq!(calls[0].amount_in, 100_000_000);
    assert_eq!(calls[0].amount_out, 90_000_000);
}

#[tokio::test]
async fn test_success_resets_amounts() {
    // Arrange
    let client = FakeStakingClient::new();
    let mut session = ready_session();

    // Act
    session.submit(Some(&client)).await.unwrap();

    // Assert
    assert_eq!(
        session.submission(),
        &SubmissionState::Succeeded("Staking successful!".to_string())
    );
    assert_eq!(session.amount().token_amount, None);
    assert_eq!(session.amount().staked_amount, None);
    assert_eq!(session.address(), STAKE_ADDRESS);
}

#[tokio::test]
async fn test_failure_keeps_amounts_and_hides_detail() {
    // Arrange
    init_tracing();
    let client = FakeStakingClient::failing_stake(ClientError::Rejected(
        "execution reverted: ERC20: insufficient allowance".to_string(),
    ));
    let mut session = ready_session();

    // Act
    let err = session.submit(Some(&client)).await.unwrap_err();

    // Assert
    assert!(matches!(err, StakeError::Submission(ClientError::Rejected(_))));
    assert_eq!(
        session.submission(),
        &SubmissionState::Failed("Failed to stake tokens. Please try again.".to_string())
    );
    assert!(!session.submission().is_loading());
    assert_eq!(session.amount().token_amount.as_deref(), Some("1.0"));
    assert_eq!(session.amount().staked_amount.as_deref(), Some("0.90000000"));
    assert_eq!(client.stake_count(), 1);
}

#[tokio::test]
async fn test_retry_after_failure_succeeds() {
    let client = FakeStakingClient::failing_stake(ClientError::Rejected("timeout".to_string()));
    let mut session = ready_session();

    assert!(session.submit(Some(&client)).await.is_err());
    session.submit(Some(&client)).await.unwrap();

    assert_eq!(client.stake_count(), 2);
    assert!(session.submission().success_message().is_some());
}

#[tokio::test]
async fn test_missing_inputs_make_no_call() {
    let client = FakeStakingClient::new();

    let mut no_amount = StakeSession::new(&test_config());
    no_amount.set_address(STAKE_ADDRESS);
    assert_eq!(
        no_amount.submit(Some(&client)).await,
        Err(StakeError::NotReady(Precondition::AmountMissing))
    );

    let mut no_address = StakeSession::new(&test_config());
    no_address.set_token_amount("2");
    assert_eq!(
        no_address.submit(Some(&client)).await,
        Err(StakeError::NotReady(Precondition::AddressMissing))
    );

    let mut non_positive = StakeSession::new(&test_config());
    non_positive.set_token_amount("0");
    non_positive.set_address(STAKE_ADDRESS);
    assert_eq!(
        non_positive.submit(Some(&client)).await,
        Err(StakeError::NotReady(Precondition::AmountMissing))
    );

    let mut no_client = ready_session();
    assert_eq!(
        no_client.submit(None::<&FakeStakingClient>).await,
        Err(StakeError::NotReady(Precondition::ClientMissing))
    );

    assert_eq!(client.stake_count(), 0);
    assert_eq!(no_client.submission(), &SubmissionState::Idle);
}

#[tokio::test]
async fn test_two_phase_submission_blocks_second_trigger() {
    // Arrange
    let client = FakeStakingClient::new();
    let mut session = ready_session();
    let connection = ConnectionState::Connected {
        address: ACCOUNT.to_string(),
    };
    assert!(session.can_submit(&connection));

    // Act
    let order = session.begin_submission(true).unwrap();

    // Assert: trigger disabled and refused while the call is in flight
    assert!(!session.can_submit(&connection));
    assert_eq!(session.begin_submission(true), Err(StakeError::Busy));
    assert_eq!(session.submission().status_text(), Some("Loading..."));

    let result = client.stake(&order).await;
    session.finish_submission(result).unwrap();
    assert!(session.can_submit(&connection));
    assert_eq!(client.stake_count(), 1);
}

#[tokio::test]
async fn test_submit_disabled_without_wallet() {
    let session = ready_session();
    assert!(!session.can_submit(&ConnectionState::Disconnected));
    assert!(!session.can_submit(&ConnectionState::Error("locked".to_string())));
}

#[tokio::test]
async fn test_custom_rate_and_precision() {
    let client = FakeStakingClient::new();
    let config = lib_stake::StakeConfig {
        rate: 0.5,
        decimals: 6,
        asset_id: "bitcoin_testnet:BTC".to_string(),
        ..test_config()
    };
    let mut session = StakeSession::new(&config);
    session.set_token_amount("3");
    session.set_address(STAKE_ADDRESS);
    assert_eq!(session.amount().staked_amount.as_deref(), Some("1.500000"));

    session.submit(Some(&client)).await.unwrap();

    let calls = client.stake_calls.borrow();
    assert_eq!(calls[0].asset_id, "bitcoin_testnet:BTC");
    assert_eq!(calls[0].amount_in, 3_000_000);
    assert_eq!(calls[0].amount_out, 1_500_000);
}
