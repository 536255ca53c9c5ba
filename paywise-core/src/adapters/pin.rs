//! Digest-comparison PIN verifier
//!
//! Keeps only the attempt/lockout shape of real credential verification; the
//! enrolled PIN is stored as a SHA-256 digest, never in clear text.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::ports::CredentialVerifier;

/// Verifies codes against a stored SHA-256 digest of the enrolled PIN
pub struct PinVerifier {
    digest: [u8; 32],
}

impl PinVerifier {
    /// Enroll a PIN by hashing it
    pub fn new(pin: &str) -> Self {
        Self {
            digest: Self::digest_of(pin),
        }
    }

    /// Restore a verifier from a stored hex digest (e.g. from settings.json)
    pub fn from_digest_hex(digest_hex: &str) -> Result<Self> {
        let bytes = hex::decode(digest_hex)?;
        let digest: [u8; 32] = bytes
            .try_into()
            .map_err(|_| anyhow!("PIN digest must be 32 bytes"))?;
        Ok(Self { digest })
    }

    /// Hex digest for persistence
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    fn digest_of(pin: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(pin.as_bytes());
        hasher.finalize().into()
    }
}

#[async_trait]
impl CredentialVerifier for PinVerifier {
    async fn verify(&self, code: &str) -> bool {
        Self::digest_of(code) == self.digest
    }
}
