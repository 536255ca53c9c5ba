//! PayWise Core - business logic for guided peer-to-peer transfers
//!
//! This crate implements the core domain logic following hexagonal
//! architecture:
//!
//! - **domain**: Core business entities (Payee, TransferDraft, Transaction)
//! - **ports**: Trait definitions for external collaborators (Directory,
//!   BalanceSource, CredentialVerifier, Ledger)
//! - **services**: Business logic orchestration (the transfer workflow and
//!   its authorization gate)
//! - **adapters**: Concrete in-memory implementations

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{demo, InMemoryBank, PinVerifier, StaticDirectory};
use config::Config;

// Re-export commonly used types at crate root
pub use domain::{
    Direction, Payee, Transaction, TransactionStatus, TransferDraft, TransferRequestBuilder,
    ValidationError,
};
pub use services::{
    AuthorizationOutcome, DirectionFilter, GateOutcome, GateState, HistoryService, ReceiptService,
    Step, TransferWorkflow, WorkflowError,
};

/// Main context for PayWise operations
///
/// Primary entry point for callers: holds the configuration and the session
/// collaborators, and hands out workflow instances wired to them. Each
/// workflow instance is independent, so concurrent sessions cannot interfere.
pub struct PaywiseContext {
    pub config: Config,
    pub directory: Arc<StaticDirectory>,
    pub bank: Arc<InMemoryBank>,
    pub verifier: Arc<PinVerifier>,
    pub history_service: HistoryService,
}

impl PaywiseContext {
    /// Create a new PayWise context
    ///
    /// In demo mode (the default) the session is seeded with the sample
    /// directory, balance, and history.
    pub async fn new(paywise_dir: &Path) -> Result<Self> {
        let config = Config::load(paywise_dir)?;

        let directory = Arc::new(StaticDirectory::new(demo::demo_payees()));

        let balance = config.starting_balance.unwrap_or_else(demo::demo_balance);
        let bank = Arc::new(InMemoryBank::new(balance));
        if config.demo_mode {
            bank.seed_history(demo::demo_history()).await;
        }

        let verifier = match &config.pin_digest {
            Some(digest) => Arc::new(PinVerifier::from_digest_hex(digest)?),
            None => Arc::new(PinVerifier::new(demo::DEMO_PIN)),
        };

        let history_service = HistoryService::new(bank.clone());

        Ok(Self {
            config,
            directory,
            bank,
            verifier,
            history_service,
        })
    }

    /// Start a new transfer attempt against this session
    pub fn start_transfer(&self) -> TransferWorkflow {
        TransferWorkflow::start(
            self.directory.clone(),
            self.bank.clone(),
            self.bank.clone(),
            self.verifier.clone(),
        )
    }
}
