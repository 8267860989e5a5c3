//! Integrity seals for proof states handed to clients.
//!
//! A seal is the uppercase hex SHA-256 digest of [`SEAL_DOMAIN`] followed by
//! the state's hash basis. The domain string is public, so a seal only
//! detects corruption in transit and naive client-side edits. It is not a
//! secret-keyed MAC and does not stop anyone who can read this source from
//! forging a state.

use crate::error::{KalkulusError, Result};
use sha2::{Digest, Sha256};

/// Domain separation prefix mixed into every seal
pub const SEAL_DOMAIN: &str = "kalkulus-state-seal-v1|";

/// A proof state that can travel through an untrusted client.
///
/// `info` must render every field relevant to proof correctness from the
/// typed state, in a fixed order, and must leave out the seal itself and any
/// purely cosmetic fields.
pub trait ProtectedState {
    /// Canonical textual fingerprint of the state
    fn info(&self) -> String;

    /// The stored seal (empty while unsealed)
    fn seal(&self) -> &str;

    fn set_seal(&mut self, seal: String);

    /// Compute the seal from the current content and store it
    fn compute_seal(&mut self) {
        let seal = digest(&self.info());
        self.set_seal(seal);
    }

    /// Recompute the seal and compare it against the stored one
    fn verify_seal(&self) -> bool {
        digest(&self.info()) == self.seal()
    }
}

/// Reject a state whose seal does not match its content
pub fn ensure_sealed<S: ProtectedState>(state: &S) -> Result<()> {
    if state.verify_seal() {
        Ok(())
    } else {
        tracing::warn!("rejected state with invalid seal");
        Err(KalkulusError::TamperedState(
            "the state seal does not match its content".into(),
        ))
    }
}

fn digest(info: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(SEAL_DOMAIN.as_bytes());
    hasher.update(info.as_bytes());
    hex::encode_upper(hasher.finalize())
}
