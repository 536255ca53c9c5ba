//! PayWise CLI - peer-to-peer transfers in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{balance, history, payees, send};

/// PayWise - peer-to-peer transfers in your terminal
#[derive(Parser)]
#[command(name = "pw", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send money through the guided transfer flow
    Send,

    /// Search the recipient directory
    Payees {
        /// Partial tag or name to search for (lists everyone if omitted)
        query: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show transaction history
    History {
        /// Partial counterparty, tag, or memo to search for
        query: Option<String>,
        /// Only sent transfers
        #[arg(long, conflicts_with = "received")]
        sent: bool,
        /// Only received transfers
        #[arg(long)]
        received: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the available balance
    Balance {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Send => send::run().await,
        Commands::Payees { query, json } => payees::run(query.as_deref(), json).await,
        Commands::History {
            query,
            sent,
            received,
            json,
        } => history::run(query.as_deref(), sent, received, json).await,
        Commands::Balance { json } => balance::run(json).await,
    }
}
