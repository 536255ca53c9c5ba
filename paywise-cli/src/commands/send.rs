//! Send command - the guided transfer flow

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use paywise_core::{
    AuthorizationOutcome, Payee, ReceiptService, TransferWorkflow, WorkflowError,
};
use paywise_core::ports::Directory;

use super::get_context;
use crate::output;

pub async fn run() -> Result<()> {
    let ctx = get_context().await?;
    let mut workflow = ctx.start_transfer();

    println!("{}", "Send Money".bold());
    println!();

    let Some(recipient) = pick_recipient(&ctx).await? else {
        output::info("Transfer cancelled.");
        return Ok(());
    };
    workflow.select_recipient(&recipient).await?;

    if !enter_amount(&mut workflow).await? {
        output::info("Transfer cancelled.");
        return Ok(());
    }

    if !review(&workflow)? {
        workflow.cancel()?;
        output::info("Transfer cancelled.");
        return Ok(());
    }
    workflow.confirm_review()?;

    authorize(&mut workflow).await
}

/// Search-and-select loop over the recipient directory
async fn pick_recipient(ctx: &paywise_core::PaywiseContext) -> Result<Option<Payee>> {
    loop {
        let query: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Search by PayTag or name (blank lists everyone)")
            .allow_empty(true)
            .interact_text()?;

        let hits = ctx.directory.search(&query).await;
        if hits.is_empty() {
            output::warning("User not found. Please check the PayTag and try again.");
            continue;
        }

        let mut items: Vec<String> = hits
            .iter()
            .map(|p| format!("{} {} ({})", p.avatar_label, p.display_name, p.tag))
            .collect();
        items.push("Cancel".to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Send to")
            .items(&items)
            .default(0)
            .interact()?;

        if choice == hits.len() {
            return Ok(None);
        }
        return Ok(Some(hits[choice].clone()));
    }
}

/// Amount/memo entry loop; re-prompts on validation errors
async fn enter_amount(workflow: &mut TransferWorkflow) -> Result<bool> {
    loop {
        let amount: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Amount (blank to cancel)")
            .allow_empty(true)
            .interact_text()?;
        if amount.trim().is_empty() {
            workflow.cancel()?;
            return Ok(false);
        }

        let memo: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Memo (optional)")
            .allow_empty(true)
            .interact_text()?;

        match workflow.submit_amount(&amount, Some(&memo)).await {
            Ok(()) => return Ok(true),
            Err(WorkflowError::Validation(e)) => {
                output::warning(&format!("{}", e));
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Show the reviewed details and ask for confirmation
fn review(workflow: &TransferWorkflow) -> Result<bool> {
    let builder = workflow.builder();
    let recipient = builder
        .recipient()
        .ok_or_else(|| anyhow::anyhow!("no recipient selected"))?;
    let amount = builder.parsed_amount()?;

    println!();
    println!("{}", "Review Transfer".bold());
    let mut table = output::create_table();
    table.add_row(vec![
        "To",
        &format!("{} ({})", recipient.display_name, recipient.tag),
    ]);
    table.add_row(vec!["Amount", &output::format_amount(amount)]);
    if let Some(memo) = builder.memo() {
        table.add_row(vec!["Memo", memo]);
    }
    println!("{}", table);

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Authorize this transfer?")
        .default(true)
        .interact()?)
}

/// PIN entry loop against the authorization gate
async fn authorize(workflow: &mut TransferWorkflow) -> Result<()> {
    loop {
        let code = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your 6-digit PIN")
            .interact()?;

        match workflow.submit_code(&code).await {
            Ok(AuthorizationOutcome::Completed(transaction)) => {
                println!();
                output::success("Transfer successful! Your money has been sent.");
                println!();
                println!("{}", ReceiptService::render(&transaction));
                return Ok(());
            }
            Ok(AuthorizationOutcome::IncorrectAttempt { remaining }) => {
                output::warning(&format!(
                    "Incorrect PIN. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                ));
            }
            Ok(AuthorizationOutcome::Locked) => {
                output::error("Too many incorrect attempts. This transfer is locked.");
                return Ok(());
            }
            Err(WorkflowError::MalformedCode) => {
                output::warning("The PIN must be exactly 6 digits.");
            }
            Err(e) => return Err(e.into()),
        }
    }
}
