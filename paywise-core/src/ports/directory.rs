//! Directory port - payee lookup abstraction

use async_trait::async_trait;

use crate::domain::Payee;

/// Recipient directory abstraction
///
/// Implementations own the directory contents; the workflow only ever reads
/// from it.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Look up payees by partial match
    ///
    /// Case-insensitive substring match against tag or display name. An empty
    /// query returns every entry in directory order. No match returns an
    /// empty list; that is a valid result, not an error.
    async fn search(&self, query: &str) -> Vec<Payee>;
}
