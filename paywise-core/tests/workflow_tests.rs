//! Integration tests for the transfer authorization workflow
//!
//! Exercises the full path from recipient search to the committed ledger
//! record, with the in-memory adapters standing in for the real directory,
//! bank, and verifier.
//!
//! Run with: cargo test --test workflow_tests -- --nocapture

use std::sync::Arc;

use rust_decimal::Decimal;

use paywise_core::adapters::{demo, InMemoryBank, PinVerifier, StaticDirectory};
use paywise_core::ports::{BalanceSource, Directory, Ledger};
use paywise_core::{
    AuthorizationOutcome, Direction, Payee, Step, TransactionStatus, TransferWorkflow,
    ValidationError, WorkflowError,
};

// ============================================================================
// Test Helpers
// ============================================================================

const PIN: &str = "123456";

/// Demo balance: $2,847.50
fn starting_balance() -> Decimal {
    Decimal::new(284750, 2)
}

fn sarah() -> Payee {
    Payee::new("@sarah_j", "Sarah Johnson")
}

/// Build a workflow over fresh demo collaborators
fn create_workflow() -> (TransferWorkflow, Arc<InMemoryBank>) {
    let directory = Arc::new(StaticDirectory::new(demo::demo_payees()));
    let bank = Arc::new(InMemoryBank::new(starting_balance()));
    let verifier = Arc::new(PinVerifier::new(PIN));
    let workflow = TransferWorkflow::start(directory, bank.clone(), bank.clone(), verifier);
    (workflow, bank)
}

/// Drive a workflow up to the Authorizing step
async fn advance_to_authorizing(workflow: &mut TransferWorkflow, amount: &str, memo: Option<&str>) {
    workflow.select_recipient(&sarah()).await.unwrap();
    workflow.submit_amount(amount, memo).await.unwrap();
    workflow.confirm_review().unwrap();
    assert_eq!(workflow.step(), Step::Authorizing);
}

// ============================================================================
// Recipient search
// ============================================================================

#[tokio::test]
async fn search_finds_single_payee_by_partial_name() {
    let directory = StaticDirectory::new(demo::demo_payees());

    let hits = directory.search("sarah").await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].tag, "@sarah_j");
    assert_eq!(hits[0].display_name, "Sarah Johnson");
}

#[tokio::test]
async fn search_with_no_match_returns_empty_not_error() {
    let directory = StaticDirectory::new(demo::demo_payees());
    assert!(directory.search("zzz").await.is_empty());
}

#[tokio::test]
async fn empty_search_returns_directory_order() {
    let directory = StaticDirectory::new(demo::demo_payees());
    let hits = directory.search("").await;
    let tags: Vec<&str> = hits.iter().map(|p| p.tag.as_str()).collect();
    assert_eq!(tags, ["@sarah_j", "@mike_chen", "@emma_w", "@david_k"]);
}

// ============================================================================
// Amount validation boundaries
// ============================================================================

#[tokio::test]
async fn amount_equal_to_balance_is_accepted() {
    let (mut workflow, _) = create_workflow();
    workflow.select_recipient(&sarah()).await.unwrap();

    workflow.submit_amount("2847.50", None).await.unwrap();
    assert_eq!(workflow.step(), Step::Reviewing);
}

#[tokio::test]
async fn amount_one_cent_over_balance_is_rejected() {
    let (mut workflow, _) = create_workflow();
    workflow.select_recipient(&sarah()).await.unwrap();

    let err = workflow.submit_amount("2847.51", None).await.unwrap_err();
    assert!(matches!(
        err,
        WorkflowError::Validation(ValidationError::AmountExceedsBalance)
    ));
    assert_eq!(workflow.step(), Step::EnteringAmount);
}

#[tokio::test]
async fn memo_boundary_100_accepted_101_rejected() {
    let (mut workflow, _) = create_workflow();
    workflow.select_recipient(&sarah()).await.unwrap();

    let long_memo = "x".repeat(101);
    let err = workflow
        .submit_amount("10.00", Some(&long_memo))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WorkflowError::Validation(ValidationError::MemoTooLong)
    ));

    let max_memo = "x".repeat(100);
    workflow.submit_amount("10.00", Some(&max_memo)).await.unwrap();
    assert_eq!(workflow.step(), Step::Reviewing);
}

// ============================================================================
// Authorization and lockout
// ============================================================================

#[tokio::test]
async fn three_wrong_codes_lock_and_fourth_never_verifies() {
    let (mut workflow, bank) = create_workflow();
    advance_to_authorizing(&mut workflow, "50.00", None).await;

    assert_eq!(
        workflow.submit_code("000000").await.unwrap(),
        AuthorizationOutcome::IncorrectAttempt { remaining: 2 }
    );
    assert_eq!(
        workflow.submit_code("111111").await.unwrap(),
        AuthorizationOutcome::IncorrectAttempt { remaining: 1 }
    );
    assert_eq!(
        workflow.submit_code("222222").await.unwrap(),
        AuthorizationOutcome::Locked
    );

    // even the correct PIN returns Locked once the gate is locked
    assert_eq!(
        workflow.submit_code(PIN).await.unwrap(),
        AuthorizationOutcome::Locked
    );
    assert_eq!(workflow.step(), Step::Authorizing);
    assert!(bank.all().await.is_empty());
    assert_eq!(bank.current().await, starting_balance());
}

#[tokio::test]
async fn correct_code_on_second_attempt_completes() {
    let (mut workflow, bank) = create_workflow();
    advance_to_authorizing(&mut workflow, "25.50", Some("Coffee")).await;

    workflow.submit_code("999999").await.unwrap();
    let outcome = workflow.submit_code(PIN).await.unwrap();

    let tx = match outcome {
        AuthorizationOutcome::Completed(tx) => tx,
        other => panic!("expected completion, got {:?}", other),
    };

    // the transaction matches the draft frozen at review confirmation
    assert_eq!(tx.direction, Direction::Sent);
    assert_eq!(tx.counterparty_tag, "@sarah_j");
    assert_eq!(tx.counterparty_name, "Sarah Johnson");
    assert_eq!(tx.amount, Decimal::new(2550, 2));
    assert_eq!(tx.memo.as_deref(), Some("Coffee"));
    assert_eq!(tx.status, TransactionStatus::Completed);

    assert_eq!(workflow.step(), Step::Completed);
    assert_eq!(workflow.completed_transaction(), Some(&tx));

    // the append is visible to an immediate balance read
    assert_eq!(bank.all().await.len(), 1);
    assert_eq!(
        bank.current().await,
        starting_balance() - Decimal::new(2550, 2)
    );
}

#[tokio::test]
async fn completion_path_appends_exactly_once() {
    let (mut workflow, bank) = create_workflow();
    advance_to_authorizing(&mut workflow, "10.00", None).await;

    workflow.submit_code(PIN).await.unwrap();
    let err = workflow.submit_code(PIN).await.unwrap_err();
    assert!(matches!(err, WorkflowError::AlreadyCompleted));

    assert_eq!(bank.all().await.len(), 1);
}

#[tokio::test]
async fn successive_transfers_get_distinct_ids() {
    let directory = Arc::new(StaticDirectory::new(demo::demo_payees()));
    let bank = Arc::new(InMemoryBank::new(starting_balance()));
    let verifier = Arc::new(PinVerifier::new(PIN));

    let mut ids = Vec::new();
    for _ in 0..2 {
        let mut workflow = TransferWorkflow::start(
            directory.clone(),
            bank.clone(),
            bank.clone(),
            verifier.clone(),
        );
        advance_to_authorizing(&mut workflow, "5.00", None).await;
        match workflow.submit_code(PIN).await.unwrap() {
            AuthorizationOutcome::Completed(tx) => ids.push(tx.id),
            other => panic!("expected completion, got {:?}", other),
        }
    }

    assert_ne!(ids[0], ids[1]);
    assert_eq!(bank.all().await.len(), 2);
}

// ============================================================================
// Cancel semantics
// ============================================================================

#[tokio::test]
async fn cancel_from_locked_authorization_resets_for_next_attempt() {
    let (mut workflow, _) = create_workflow();
    advance_to_authorizing(&mut workflow, "50.00", None).await;

    for code in ["000000", "111111", "222222"] {
        workflow.submit_code(code).await.unwrap();
    }
    assert!(workflow.authorization().is_locked());

    workflow.cancel().unwrap();
    assert_eq!(workflow.step(), Step::SelectingRecipient);
    assert_eq!(workflow.authorization().attempts(), 0);
    assert!(!workflow.authorization().is_locked());

    // the reset instance can run a full transfer again
    advance_to_authorizing(&mut workflow, "50.00", None).await;
    assert!(matches!(
        workflow.submit_code(PIN).await.unwrap(),
        AuthorizationOutcome::Completed(_)
    ));
}

#[tokio::test]
async fn cancel_is_available_from_every_non_completed_step() {
    for advance in 0..4 {
        let (mut workflow, bank) = create_workflow();
        if advance >= 1 {
            workflow.select_recipient(&sarah()).await.unwrap();
        }
        if advance >= 2 {
            workflow.submit_amount("10.00", None).await.unwrap();
        }
        if advance >= 3 {
            workflow.confirm_review().unwrap();
        }

        workflow.cancel().unwrap();
        assert_eq!(workflow.step(), Step::SelectingRecipient);
        assert!(workflow.builder().recipient().is_none());
        assert!(bank.all().await.is_empty());
    }
}
