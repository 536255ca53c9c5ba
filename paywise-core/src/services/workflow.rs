//! Transfer workflow - the end-to-end authorization state machine
//!
//! Orchestrates recipient selection, amount entry, review, PIN authorization,
//! and the final ledger commit. One instance corresponds to one user-driven
//! transfer attempt; all mutating operations take `&mut self`, so they are
//! serialized by construction.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{Payee, Transaction, TransferDraft, TransferRequestBuilder, ValidationError};
use crate::ports::{BalanceSource, CredentialVerifier, Directory, Ledger};
use crate::services::authorization::{AuthorizationGate, GateOutcome};

/// Current step of the guided flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SelectingRecipient,
    EnteringAmount,
    Reviewing,
    Authorizing,
    Completed,
}

/// Typed failures of workflow operations
///
/// Failure paths leave the draft and authorization state untouched except for
/// the documented attempt counter.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("operation not valid while {actual:?}")]
    WrongStep { actual: Step },

    #[error("no payee with tag {tag} in the directory")]
    UnknownRecipient { tag: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("authorization code must be exactly 6 digits")]
    MalformedCode,

    #[error("this transfer has already completed")]
    AlreadyCompleted,

    #[error("transfer draft is incomplete")]
    IncompleteDraft,
}

/// Outcome of one authorization submission at the workflow level
///
/// `Completed` carries the committed transaction and is the single completion
/// notification: it is produced exactly once per successful run.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorizationOutcome {
    Completed(Transaction),
    IncorrectAttempt { remaining: u8 },
    Locked,
}

/// The send-money state machine
pub struct TransferWorkflow {
    directory: Arc<dyn Directory>,
    balance: Arc<dyn BalanceSource>,
    ledger: Arc<dyn Ledger>,
    gate: AuthorizationGate,
    builder: TransferRequestBuilder,
    step: Step,
    /// Draft frozen at review confirmation; consumed by the commit
    frozen: Option<TransferDraft>,
    completed: Option<Transaction>,
}

impl TransferWorkflow {
    /// Start a fresh transfer attempt
    pub fn start(
        directory: Arc<dyn Directory>,
        balance: Arc<dyn BalanceSource>,
        ledger: Arc<dyn Ledger>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            directory,
            balance,
            ledger,
            gate: AuthorizationGate::new(verifier),
            builder: TransferRequestBuilder::default(),
            step: Step::SelectingRecipient,
            frozen: None,
            completed: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// The in-progress draft input
    pub fn builder(&self) -> &TransferRequestBuilder {
        &self.builder
    }

    /// Attempt/lockout state of the current authorization
    pub fn authorization(&self) -> &AuthorizationGate {
        &self.gate
    }

    /// The committed transaction, once the workflow reaches `Completed`
    pub fn completed_transaction(&self) -> Option<&Transaction> {
        self.completed.as_ref()
    }

    fn ensure_step(&self, expected: Step) -> Result<(), WorkflowError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WorkflowError::WrongStep { actual: self.step })
        }
    }

    /// Choose the recipient; the payee must come from the directory
    pub async fn select_recipient(&mut self, payee: &Payee) -> Result<(), WorkflowError> {
        self.ensure_step(Step::SelectingRecipient)?;

        let hits = self.directory.search(&payee.tag).await;
        let recipient = hits
            .into_iter()
            .find(|p| p.tag == payee.tag)
            .ok_or_else(|| WorkflowError::UnknownRecipient {
                tag: payee.tag.clone(),
            })?;

        tracing::debug!(tag = %recipient.tag, "recipient selected");
        self.builder.set_recipient(recipient);
        self.step = Step::EnteringAmount;
        Ok(())
    }

    /// Submit amount and optional memo, validated against the current balance
    ///
    /// On a validation error the workflow stays on this step with the draft
    /// unchanged; the caller re-prompts.
    pub async fn submit_amount(
        &mut self,
        raw_amount: &str,
        memo: Option<&str>,
    ) -> Result<(), WorkflowError> {
        self.ensure_step(Step::EnteringAmount)?;

        // stage the input so a failed validation is a no-op on the draft
        let mut staged = self.builder.clone();
        staged.set_amount(raw_amount);
        if let Some(memo) = memo {
            staged.set_memo(memo);
        }

        let balance = self.balance.current().await;
        staged.validate(balance)?;

        self.builder = staged;
        self.step = Step::Reviewing;
        Ok(())
    }

    /// Confirm the reviewed details and freeze the draft
    ///
    /// The committed transaction is built from the draft as it stands here;
    /// later balance changes cannot alter it.
    pub fn confirm_review(&mut self) -> Result<(), WorkflowError> {
        self.ensure_step(Step::Reviewing)?;

        self.frozen = Some(self.builder.freeze().ok_or(WorkflowError::IncompleteDraft)?);
        self.step = Step::Authorizing;
        Ok(())
    }

    /// Submit an authorization code
    ///
    /// A malformed code (anything but 6 ASCII digits) is rejected before the
    /// gate runs and does not consume an attempt. On `Verified` the frozen
    /// draft is committed to the ledger exactly once and returned as
    /// `AuthorizationOutcome::Completed`.
    pub async fn submit_code(
        &mut self,
        code: &str,
    ) -> Result<AuthorizationOutcome, WorkflowError> {
        if self.step == Step::Completed {
            return Err(WorkflowError::AlreadyCompleted);
        }
        self.ensure_step(Step::Authorizing)?;

        if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(WorkflowError::MalformedCode);
        }

        match self.gate.submit_code(code).await {
            GateOutcome::Verified => {
                // the take() makes the commit idempotent: the draft can only
                // be turned into a transaction once
                let draft = self.frozen.take().ok_or(WorkflowError::AlreadyCompleted)?;
                let transaction = Transaction::sent(&draft);
                self.ledger.append(transaction.clone()).await;
                tracing::info!(id = %transaction.id, amount = %transaction.amount, "transfer committed");
                self.step = Step::Completed;
                self.completed = Some(transaction.clone());
                Ok(AuthorizationOutcome::Completed(transaction))
            }
            GateOutcome::IncorrectAttempt { remaining } => {
                Ok(AuthorizationOutcome::IncorrectAttempt { remaining })
            }
            GateOutcome::Locked => Ok(AuthorizationOutcome::Locked),
        }
    }

    /// Abandon the attempt: discard the draft, reset authorization state,
    /// and return to recipient selection
    ///
    /// Available from every step except `Completed`; a finished instance
    /// stays finished so the completion notification cannot be re-armed.
    pub fn cancel(&mut self) -> Result<(), WorkflowError> {
        if self.step == Step::Completed {
            return Err(WorkflowError::AlreadyCompleted);
        }

        tracing::debug!(step = ?self.step, "transfer cancelled");
        self.builder = TransferRequestBuilder::default();
        self.frozen = None;
        self.gate.reset();
        self.step = Step::SelectingRecipient;
        Ok(())
    }
}
