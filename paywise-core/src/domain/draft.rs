//! Transfer draft and its validating builder

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::payee::Payee;

/// Maximum memo length in characters
pub const MEMO_MAX_LEN: usize = 100;

/// Why a draft failed validation
///
/// All variants are recoverable: the workflow stays on the current step and
/// the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("amount exceeds the available balance")]
    AmountExceedsBalance,
    #[error("memo must be at most {MEMO_MAX_LEN} characters")]
    MemoTooLong,
}

/// A not-yet-committed transfer, owned by exactly one workflow instance
///
/// Frozen at review confirmation; discarded on cancel or completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferDraft {
    pub recipient: Payee,
    pub amount: Decimal,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Accumulates and validates transfer input before anything is committed
///
/// The builder never knows the balance itself; it is supplied per `validate`
/// call so the check always runs against the caller's current view of funds.
#[derive(Debug, Clone, Default)]
pub struct TransferRequestBuilder {
    recipient: Option<Payee>,
    amount_raw: Option<String>,
    memo: Option<String>,
}

impl TransferRequestBuilder {
    pub fn set_recipient(&mut self, payee: Payee) {
        self.recipient = Some(payee);
    }

    pub fn set_amount(&mut self, raw: impl Into<String>) {
        self.amount_raw = Some(raw.into());
    }

    /// Set the memo; blank input counts as no memo
    pub fn set_memo(&mut self, memo: impl Into<String>) {
        let memo = memo.into();
        let trimmed = memo.trim();
        self.memo = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    pub fn recipient(&self) -> Option<&Payee> {
        self.recipient.as_ref()
    }

    pub fn memo(&self) -> Option<&str> {
        self.memo.as_deref()
    }

    /// Parse the raw amount input, rejecting non-numeric and non-positive values
    pub fn parsed_amount(&self) -> Result<Decimal, ValidationError> {
        let raw = self.amount_raw.as_deref().unwrap_or("");
        let amount = Decimal::from_str(raw.trim()).map_err(|_| ValidationError::InvalidAmount)?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount);
        }
        Ok(amount)
    }

    /// Validate the draft against the supplied balance
    ///
    /// Idempotent and side-effect free; never mutates the builder. An amount
    /// equal to the balance is valid, anything above it is not.
    pub fn validate(&self, balance: Decimal) -> Result<(), ValidationError> {
        let amount = self.parsed_amount()?;
        if amount > balance {
            return Err(ValidationError::AmountExceedsBalance);
        }
        if let Some(memo) = &self.memo {
            if memo.chars().count() > MEMO_MAX_LEN {
                return Err(ValidationError::MemoTooLong);
            }
        }
        Ok(())
    }

    /// Freeze the accumulated input into an immutable draft
    ///
    /// Returns `None` until both a recipient and a parseable amount are set.
    pub fn freeze(&self) -> Option<TransferDraft> {
        let recipient = self.recipient.clone()?;
        let amount = self.parsed_amount().ok()?;
        Some(TransferDraft {
            recipient,
            amount,
            memo: self.memo.clone(),
            created_at: Utc::now(),
        })
    }
}
