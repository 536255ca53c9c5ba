//! In-memory adapters for the directory and bank ports
//!
//! Session-scoped implementations; nothing survives the process. Real
//! deployments would put a remote directory and a settlement backend behind
//! the same traits.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::domain::{Direction, Payee, Transaction};
use crate::ports::{BalanceSource, Directory, Ledger};

/// Fixed in-memory recipient directory
pub struct StaticDirectory {
    payees: Vec<Payee>,
}

impl StaticDirectory {
    pub fn new(payees: Vec<Payee>) -> Self {
        Self { payees }
    }
}

#[async_trait]
impl Directory for StaticDirectory {
    async fn search(&self, query: &str) -> Vec<Payee> {
        self.payees
            .iter()
            .filter(|p| p.matches(query))
            .cloned()
            .collect()
    }
}

struct BankState {
    balance: Decimal,
    transactions: Vec<Transaction>,
}

/// In-memory account: balance plus append-only transaction list
///
/// Both ports share one mutex-guarded state, so a balance read immediately
/// after an append observes the debit.
pub struct InMemoryBank {
    state: Mutex<BankState>,
}

impl InMemoryBank {
    pub fn new(balance: Decimal) -> Self {
        Self {
            state: Mutex::new(BankState {
                balance,
                transactions: Vec::new(),
            }),
        }
    }

    /// Seed committed history without touching the balance
    ///
    /// The starting balance already accounts for seeded transactions.
    pub async fn seed_history(&self, transactions: Vec<Transaction>) {
        let mut state = self.state.lock().await;
        state.transactions.extend(transactions);
    }
}

#[async_trait]
impl BalanceSource for InMemoryBank {
    async fn current(&self) -> Decimal {
        self.state.lock().await.balance
    }
}

#[async_trait]
impl Ledger for InMemoryBank {
    async fn append(&self, transaction: Transaction) {
        let mut state = self.state.lock().await;
        match transaction.direction {
            Direction::Sent => state.balance -= transaction.amount,
            Direction::Received => state.balance += transaction.amount,
        }
        state.transactions.push(transaction);
    }

    async fn all(&self) -> Vec<Transaction> {
        self.state.lock().await.transactions.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransferDraft;
    use chrono::Utc;

    fn directory() -> StaticDirectory {
        StaticDirectory::new(vec![
            Payee::new("@sarah_j", "Sarah Johnson"),
            Payee::new("@mike_chen", "Mike Chen"),
        ])
    }

    #[tokio::test]
    async fn test_search_matches_tag_or_name() {
        let dir = directory();
        let hits = dir.search("sarah").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tag, "@sarah_j");

        assert!(dir.search("zzz").await.is_empty());
        assert_eq!(dir.search("").await.len(), 2);
    }

    #[tokio::test]
    async fn test_append_debits_balance_atomically() {
        let bank = InMemoryBank::new(Decimal::new(10000, 2));
        let tx = Transaction::sent(&TransferDraft {
            recipient: Payee::new("@mike_chen", "Mike Chen"),
            amount: Decimal::new(2500, 2),
            memo: None,
            created_at: Utc::now(),
        });
        bank.append(tx).await;

        assert_eq!(bank.current().await, Decimal::new(7500, 2));
        assert_eq!(bank.all().await.len(), 1);
    }
}
