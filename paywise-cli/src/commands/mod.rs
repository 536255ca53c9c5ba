//! CLI command implementations

pub mod balance;
pub mod history;
pub mod payees;
pub mod send;

use std::path::PathBuf;

use anyhow::{Context, Result};
use paywise_core::PaywiseContext;

/// Get the paywise directory from environment or default
pub fn get_paywise_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PAYWISE_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".paywise")
    }
}

/// Get or create the paywise context for this session
pub async fn get_context() -> Result<PaywiseContext> {
    let paywise_dir = get_paywise_dir();

    std::fs::create_dir_all(&paywise_dir)
        .with_context(|| format!("Failed to create paywise directory: {:?}", paywise_dir))?;

    PaywiseContext::new(&paywise_dir)
        .await
        .context("Failed to initialize paywise context")
}
