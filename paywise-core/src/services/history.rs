//! History service - search and filtering over committed transactions

use std::sync::Arc;

use crate::domain::{Direction, Transaction};
use crate::ports::Ledger;

/// Which directions to include when listing history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionFilter {
    #[default]
    All,
    Sent,
    Received,
}

impl DirectionFilter {
    fn accepts(&self, direction: Direction) -> bool {
        match self {
            DirectionFilter::All => true,
            DirectionFilter::Sent => direction == Direction::Sent,
            DirectionFilter::Received => direction == Direction::Received,
        }
    }
}

/// Read-only view over the ledger for history screens
///
/// Carries no policy logic; it only reshapes what the ledger already holds.
pub struct HistoryService {
    ledger: Arc<dyn Ledger>,
}

impl HistoryService {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self { ledger }
    }

    /// List transactions, most recent first
    ///
    /// The query is a case-insensitive substring match against counterparty
    /// name, tag, or memo; an empty query matches everything.
    pub async fn search(&self, query: &str, filter: DirectionFilter) -> Vec<Transaction> {
        let query = query.to_lowercase();
        let mut hits: Vec<Transaction> = self
            .ledger
            .all()
            .await
            .into_iter()
            .filter(|tx| filter.accepts(tx.direction))
            .filter(|tx| {
                tx.counterparty_name.to_lowercase().contains(&query)
                    || tx.counterparty_tag.to_lowercase().contains(&query)
                    || tx
                        .memo
                        .as_deref()
                        .is_some_and(|m| m.to_lowercase().contains(&query))
            })
            .collect();
        hits.reverse();
        hits
    }

    /// Look up a single transaction by id
    pub async fn find(&self, id: &str) -> Option<Transaction> {
        self.ledger.all().await.into_iter().find(|tx| tx.id == id)
    }
}
