//! Payees command - search the recipient directory

use anyhow::Result;
use paywise_core::ports::Directory;

use super::get_context;
use crate::output;

pub async fn run(query: Option<&str>, json: bool) -> Result<()> {
    let ctx = get_context().await?;
    let hits = ctx.directory.search(query.unwrap_or("")).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        output::warning("User not found. Please check the PayTag and try again.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["PayTag", "Name"]);
    for payee in &hits {
        table.add_row(vec![&payee.tag, &payee.display_name]);
    }
    println!("{}", table);

    Ok(())
}
