//! Trait definitions for external collaborators
//!
//! The workflow consumes these as injected dependencies, never as ambient
//! singletons, so concurrent sessions cannot interfere.

mod bank;
mod directory;
mod verifier;

pub use bank::{BalanceSource, Ledger};
pub use directory::Directory;
pub use verifier::CredentialVerifier;
