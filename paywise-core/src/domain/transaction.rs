//! Committed transaction domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::draft::TransferDraft;

/// Whether funds left or entered the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Sent => "sent",
            Direction::Received => "received",
        }
    }
}

/// Transaction lifecycle status
///
/// Only `Completed` exists today; transactions are appended to the ledger
/// exactly once, after authorization, and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
}

/// A committed transfer, the sole artifact appended to the ledger
///
/// All fields are frozen at creation time. Later changes to the balance or
/// the directory must not retroactively alter a committed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub direction: Direction,
    pub counterparty_tag: String,
    pub counterparty_name: String,
    pub amount: Decimal,
    pub memo: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Commit a draft as an outgoing transfer, stamping id and time
    pub fn sent(draft: &TransferDraft) -> Self {
        Self {
            id: Self::generate_id(),
            direction: Direction::Sent,
            counterparty_tag: draft.recipient.tag.clone(),
            counterparty_name: draft.recipient.display_name.clone(),
            amount: draft.amount,
            memo: draft.memo.clone(),
            timestamp: Utc::now(),
            status: TransactionStatus::Completed,
        }
    }

    /// Generate a globally unique transaction id
    ///
    /// Random UUIDs rather than wall-clock time, so two transfers committed
    /// within the same clock tick still get distinct ids.
    pub fn generate_id() -> String {
        format!("TXN-{}", Uuid::new_v4().simple())
    }
}
