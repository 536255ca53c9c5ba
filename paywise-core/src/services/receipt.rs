//! Receipt service - plain-text receipts for committed transactions

use crate::domain::{Direction, Transaction};

/// Renders digital receipts
///
/// Presentation only: everything on the receipt comes from the frozen
/// transaction record.
pub struct ReceiptService;

impl ReceiptService {
    /// Render the full receipt block
    pub fn render(transaction: &Transaction) -> String {
        let mut lines = Vec::new();
        lines.push("PayWise".to_string());
        lines.push("Digital Receipt".to_string());
        lines.push("-".repeat(38));
        lines.push(format!("Transaction ID:  {}", transaction.id));
        lines.push(format!("Type:            {}", transaction.direction.as_str()));
        let party_label = match transaction.direction {
            Direction::Sent => "To:",
            Direction::Received => "From:",
        };
        lines.push(format!(
            "{:<16} {} ({})",
            party_label, transaction.counterparty_name, transaction.counterparty_tag
        ));
        lines.push(format!("Amount:          ${:.2}", transaction.amount));
        if let Some(memo) = &transaction.memo {
            lines.push(format!("Memo:            {}", memo));
        }
        lines.push(format!(
            "Date:            {}",
            transaction.timestamp.format("%m/%d/%Y")
        ));
        lines.push(format!(
            "Time:            {}",
            transaction.timestamp.format("%I:%M %p")
        ));
        lines.push("Status:          completed".to_string());
        lines.push("-".repeat(38));
        lines.push("Thank you for using PayWise".to_string());
        lines.push("Keep this receipt for your records".to_string());
        lines.join("\n")
    }

    /// One-line summary suitable for sharing
    pub fn share_line(transaction: &Transaction) -> String {
        let preposition = match transaction.direction {
            Direction::Sent => "to",
            Direction::Received => "from",
        };
        format!(
            "Transaction {} - ${:.2} {} {} {}",
            transaction.id,
            transaction.amount,
            transaction.direction.as_str(),
            preposition,
            transaction.counterparty_name
        )
    }
}
