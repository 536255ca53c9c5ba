//! Demo data for interactive use and testing
//!
//! Seeds the session with the sample directory, balance, and history the
//! desktop app ships with.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{Direction, Payee, Transaction, TransactionStatus};

/// PIN enrolled for demo sessions
pub const DEMO_PIN: &str = "123456";

/// Starting balance for demo sessions: $2,847.50
pub fn demo_balance() -> Decimal {
    Decimal::new(284750, 2)
}

/// The demo recipient directory
pub fn demo_payees() -> Vec<Payee> {
    vec![
        Payee::new("@sarah_j", "Sarah Johnson"),
        Payee::new("@mike_chen", "Mike Chen"),
        Payee::new("@emma_w", "Emma Wilson"),
        Payee::new("@david_k", "David Kim"),
    ]
}

/// Seed history: a few completed transfers predating the session
///
/// The demo starting balance already accounts for these.
pub fn demo_history() -> Vec<Transaction> {
    vec![
        Transaction {
            id: format!("TXN-{}", Uuid::new_v4().simple()),
            direction: Direction::Sent,
            counterparty_tag: "@sarah_j".to_string(),
            counterparty_name: "Sarah Johnson".to_string(),
            amount: Decimal::new(2550, 2),
            memo: Some("Coffee".to_string()),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 18, 10, 45, 0).unwrap(),
            status: TransactionStatus::Completed,
        },
        Transaction {
            id: format!("TXN-{}", Uuid::new_v4().simple()),
            direction: Direction::Sent,
            counterparty_tag: "@mike_chen".to_string(),
            counterparty_name: "Mike Chen".to_string(),
            amount: Decimal::new(12000, 2),
            memo: Some("Concert tickets".to_string()),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 19, 19, 15, 0).unwrap(),
            status: TransactionStatus::Completed,
        },
        Transaction {
            id: format!("TXN-{}", Uuid::new_v4().simple()),
            direction: Direction::Received,
            counterparty_tag: "@emma_w".to_string(),
            counterparty_name: "Emma Wilson".to_string(),
            amount: Decimal::new(4500, 2),
            memo: Some("Lunch split".to_string()),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 20, 14, 30, 0).unwrap(),
            status: TransactionStatus::Completed,
        },
    ]
}
