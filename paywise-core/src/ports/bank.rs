//! Bank ports - balance reads and the append-only ledger

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::Transaction;

/// Read access to the caller's available funds
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// The balance as of this call
    async fn current(&self) -> Decimal;
}

/// Append-only store of committed transactions
///
/// An append must be atomic with respect to subsequent balance reads in the
/// same session: a `BalanceSource::current` call immediately after `append`
/// reflects the just-appended transaction.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Record a committed transaction
    async fn append(&self, transaction: Transaction);

    /// All committed transactions, in append order
    async fn all(&self) -> Vec<Transaction>;
}
