//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external
//! dependencies.

pub mod draft;
mod payee;
mod transaction;

pub use draft::{TransferDraft, TransferRequestBuilder, ValidationError, MEMO_MAX_LEN};
pub use payee::Payee;
pub use transaction::{Direction, Transaction, TransactionStatus};
