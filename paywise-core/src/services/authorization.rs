//! Authorization gate - PIN attempt counting and lockout

use std::sync::Arc;

use crate::ports::CredentialVerifier;

/// Maximum incorrect submissions before the gate locks
pub const MAX_ATTEMPTS: u8 = 3;

/// Gate lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    AwaitingInput,
    /// Terminal success; the gate accepts no further submissions
    Verified,
    /// Terminal failure; cleared only by resetting the gate
    Locked,
}

/// Result of one code submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Verified,
    IncorrectAttempt { remaining: u8 },
    Locked,
}

/// PIN-entry state machine with attempt counting and lockout
///
/// The comparison predicate is the injected [`CredentialVerifier`]; the gate
/// owns only the policy. Submissions are serialized through `&mut self`, so
/// rapid repeated calls cannot race on the attempt counter.
pub struct AuthorizationGate {
    verifier: Arc<dyn CredentialVerifier>,
    attempts: u8,
    state: GateState,
}

impl AuthorizationGate {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            verifier,
            attempts: 0,
            state: GateState::AwaitingInput,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn is_locked(&self) -> bool {
        self.state == GateState::Locked
    }

    /// Evaluate one authorization code
    ///
    /// While locked, always returns `Locked` without evaluating the code or
    /// incrementing the counter. After `Verified` the gate is one-shot: the
    /// terminal outcome is returned and the code is not re-evaluated.
    pub async fn submit_code(&mut self, code: &str) -> GateOutcome {
        match self.state {
            GateState::Locked => GateOutcome::Locked,
            GateState::Verified => GateOutcome::Verified,
            GateState::AwaitingInput => {
                if self.verifier.verify(code).await {
                    self.state = GateState::Verified;
                    GateOutcome::Verified
                } else {
                    self.attempts += 1;
                    if self.attempts >= MAX_ATTEMPTS {
                        self.state = GateState::Locked;
                        tracing::warn!(attempts = self.attempts, "authorization locked");
                        GateOutcome::Locked
                    } else {
                        GateOutcome::IncorrectAttempt {
                            remaining: MAX_ATTEMPTS - self.attempts,
                        }
                    }
                }
            }
        }
    }

    /// Clear attempts and lockout for a fresh authorization attempt
    pub fn reset(&mut self) {
        self.attempts = 0;
        self.state = GateState::AwaitingInput;
    }
}
