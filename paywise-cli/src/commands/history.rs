//! History command - list committed transactions

use anyhow::Result;
use paywise_core::DirectionFilter;

use super::get_context;
use crate::output;

pub async fn run(query: Option<&str>, sent: bool, received: bool, json: bool) -> Result<()> {
    let ctx = get_context().await?;

    let filter = if sent {
        DirectionFilter::Sent
    } else if received {
        DirectionFilter::Received
    } else {
        DirectionFilter::All
    };

    let transactions = ctx
        .history_service
        .search(query.unwrap_or(""), filter)
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions)?);
        return Ok(());
    }

    if transactions.is_empty() {
        output::info("No transactions found.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Date", "Type", "Counterparty", "Amount", "Memo", "ID"]);
    for tx in &transactions {
        table.add_row(vec![
            tx.timestamp.format("%m/%d/%Y %I:%M %p").to_string(),
            tx.direction.as_str().to_string(),
            format!("{} ({})", tx.counterparty_name, tx.counterparty_tag),
            output::format_amount(tx.amount),
            tx.memo.clone().unwrap_or_default(),
            tx.id.clone(),
        ]);
    }
    println!("{}", table);

    Ok(())
}
