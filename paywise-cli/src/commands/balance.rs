//! Balance command - show available funds

use anyhow::Result;
use colored::Colorize;
use paywise_core::ports::BalanceSource;

use super::get_context;
use crate::output;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context().await?;
    let balance = ctx.bank.current().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "balance": balance }))?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Available balance:".bold(),
        output::format_amount(balance).green()
    );

    Ok(())
}
