//! Credential verifier port

use async_trait::async_trait;

/// Verification predicate for authorization codes
///
/// The gate owns the attempt/lockout policy but not the comparison itself.
/// How a code is actually checked (digest comparison, remote call, hardware
/// token) is a trust boundary the core makes no assumptions about.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, code: &str) -> bool;
}
