//! Payload encryption seam and default cipher.
//!
//! Clients may negotiate end-to-end payload encryption on top of the
//! WebSocket. The pipeline consumes the [`MessageCipher`] capability —
//! key lookup and a one-shot encrypt — and ships [`SharedKeyCipher`], a
//! ChaCha20-Poly1305 implementation for hosts without their own crypto
//! stack. Wire compatibility of the algorithm is the host's concern, not
//! part of the JSON contract.

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};

use crate::error::{GatewayError, Result};

/// Nonce size prepended to every ciphertext.
pub const NONCE_SIZE: usize = 24;

/// Symmetric key size.
pub const KEY_SIZE: usize = 32;

/// Capability: current shared key plus a one-shot encrypt.
///
/// `key` is separate from `encrypt` so a missing key (not yet negotiated,
/// rotated away) is distinguishable from an encryption failure — the
/// pipeline logs and drops differently for each.
pub trait MessageCipher {
    /// The current symmetric key, or `None` if unavailable.
    fn key(&self) -> Option<Vec<u8>>;

    /// Encrypt a serialized payload under `key`.
    fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>>;
}

/// ChaCha20-Poly1305 cipher over a process-shared key.
///
/// Output layout: `nonce(24) || ciphertext+tag`. A fresh random nonce is
/// drawn per message.
#[derive(Debug, Default)]
pub struct SharedKeyCipher {
    key: Option<[u8; KEY_SIZE]>,
}

impl SharedKeyCipher {
    /// Cipher with a key already negotiated.
    pub fn with_key(key: [u8; KEY_SIZE]) -> Self {
        Self { key: Some(key) }
    }

    /// Cipher with no key yet — `key()` reports unavailable.
    pub fn unkeyed() -> Self {
        Self { key: None }
    }

    /// Install or rotate the shared key.
    pub fn set_key(&mut self, key: [u8; KEY_SIZE]) {
        self.key = Some(key);
    }

    /// Generate a fresh random key.
    ///
    /// # Errors
    /// Fails only if the OS entropy source does.
    pub fn generate_key() -> Result<[u8; KEY_SIZE]> {
        let mut key = [0u8; KEY_SIZE];
        getrandom::fill(&mut key)
            .map_err(|e| GatewayError::Custom(format!("entropy source failed: {e}")))?;
        Ok(key)
    }

    /// Decrypt a `nonce || ciphertext` payload produced by `encrypt`.
    ///
    /// # Errors
    /// Returns `EncryptionFailure` on truncated input, a bad key, or an
    /// authentication tag mismatch.
    pub fn decrypt(&self, payload: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        if payload.len() < NONCE_SIZE {
            return Err(GatewayError::EncryptionFailure);
        }

        let (nonce, ciphertext) = payload.split_at(NONCE_SIZE);
        let cipher = XChaCha20Poly1305::new_from_slice(key)
            .map_err(|_| GatewayError::EncryptionFailure)?;

        cipher
            .decrypt(XNonce::from_slice(nonce), ciphertext)
            .map_err(|_| GatewayError::EncryptionFailure)
    }
}

impl MessageCipher for SharedKeyCipher {
    fn key(&self) -> Option<Vec<u8>> {
        self.key.map(|k| k.to_vec())
    }

    fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let cipher = XChaCha20Poly1305::new_from_slice(key)
            .map_err(|_| GatewayError::EncryptionFailure)?;

        let mut nonce = [0u8; NONCE_SIZE];
        getrandom::fill(&mut nonce).map_err(|_| GatewayError::EncryptionFailure)?;

        let ciphertext = cipher
            .encrypt(XNonce::from_slice(&nonce), plaintext)
            .map_err(|_| GatewayError::EncryptionFailure)?;

        let mut payload = nonce.to_vec();
        payload.extend(ciphertext);
        Ok(payload)
    }
}
