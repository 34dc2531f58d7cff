//! Encryption of personal fields before they leave the browser.
//!
//! Values are sealed with AES-256-GCM under the deployment key from
//! `[encryption]` in the client config and sent as
//! `base64(nonce || ciphertext)`.

use std::sync::Arc;

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use leptos::prelude::*;
use thiserror::Error;

use crate::shared::config::EncryptionConfig;

const NONCE_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("could not encrypt {field}: {reason}")]
pub struct EncryptError {
    pub field: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyError {
    #[error("encryption key is not base64: {0}")]
    Encoding(String),
    #[error("encryption key must be 32 bytes, got {0}")]
    Length(usize),
}

/// Encrypts one plaintext field value for the API.
pub trait FieldEncryptor: Send + Sync {
    fn encrypt(&self, field: &'static str, plain: &str) -> Result<String, EncryptError>;
}

/// Sends values as entered. Installed only when no key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEncryptor;

impl FieldEncryptor for NoopEncryptor {
    fn encrypt(&self, _field: &'static str, plain: &str) -> Result<String, EncryptError> {
        Ok(plain.to_string())
    }
}

/// AES-256-GCM with a fresh random nonce per value.
pub struct AesGcmEncryptor {
    cipher: Aes256Gcm,
}

impl AesGcmEncryptor {
    pub fn from_base64_key(key: &str) -> Result<Self, KeyError> {
        let bytes = BASE64
            .decode(key.trim())
            .map_err(|e| KeyError::Encoding(e.to_string()))?;
        let cipher = Aes256Gcm::new_from_slice(&bytes).map_err(|_| KeyError::Length(bytes.len()))?;
        Ok(Self { cipher })
    }

    pub fn decrypt(&self, field: &'static str, sealed: &str) -> Result<String, EncryptError> {
        let fail = |reason: String| EncryptError { field, reason };
        let bytes = BASE64.decode(sealed).map_err(|e| fail(e.to_string()))?;
        if bytes.len() < NONCE_LEN {
            return Err(fail("value too short".into()));
        }
        let (nonce, ciphertext) = bytes.split_at(NONCE_LEN);
        let plain = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|e| fail(e.to_string()))?;
        String::from_utf8(plain).map_err(|e| fail(e.to_string()))
    }
}

impl FieldEncryptor for AesGcmEncryptor {
    fn encrypt(&self, field: &'static str, plain: &str) -> Result<String, EncryptError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plain.as_bytes())
            .map_err(|e| EncryptError {
                field,
                reason: e.to_string(),
            })?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(sealed))
    }
}

/// Refuses every value; stands in for a key that failed to load.
struct Unavailable(KeyError);

impl FieldEncryptor for Unavailable {
    fn encrypt(&self, field: &'static str, _plain: &str) -> Result<String, EncryptError> {
        Err(EncryptError {
            field,
            reason: self.0.to_string(),
        })
    }
}

/// Encryptor for the configured key. A broken key fails every encryption
/// instead of sending plaintext.
pub fn encryptor_from_config(config: &EncryptionConfig) -> Arc<dyn FieldEncryptor> {
    let Some(key) = config.key.as_deref().filter(|k| !k.trim().is_empty()) else {
        log::warn!("no encryption key configured, personal fields are sent in plaintext");
        return Arc::new(NoopEncryptor);
    };
    match AesGcmEncryptor::from_base64_key(key) {
        Ok(encryptor) => Arc::new(encryptor),
        Err(e) => {
            log::error!("{e}");
            Arc::new(Unavailable(e))
        }
    }
}

/// Encryptor placed in context by `App`.
#[derive(Clone)]
pub struct EncryptorHandle(pub Arc<dyn FieldEncryptor>);

pub fn use_field_encryptor() -> Arc<dyn FieldEncryptor> {
    use_context::<EncryptorHandle>()
        .map(|handle| handle.0)
        .unwrap_or_else(|| Arc::new(NoopEncryptor))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 32 bytes of 0x07
    const KEY: &str = "BwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwc=";

    fn config(key: Option<&str>) -> EncryptionConfig {
        EncryptionConfig {
            key: key.map(str::to_string),
        }
    }

    #[test]
    fn test_aes_gcm_round_trip() {
        let encryptor = AesGcmEncryptor::from_base64_key(KEY).unwrap();
        let sealed = encryptor.encrypt("email", "ana@example.com").unwrap();
        assert_ne!(sealed, "ana@example.com");
        assert_eq!(encryptor.decrypt("email", &sealed).unwrap(), "ana@example.com");
    }

    #[test]
    fn test_nonce_differs_per_value() {
        let encryptor = AesGcmEncryptor::from_base64_key(KEY).unwrap();
        let one = encryptor.encrypt("fullName", "Ana").unwrap();
        let two = encryptor.encrypt("fullName", "Ana").unwrap();
        assert_ne!(one, two);
    }

    #[test]
    fn test_tampered_value_is_rejected() {
        let encryptor = AesGcmEncryptor::from_base64_key(KEY).unwrap();
        let mut bytes = BASE64.decode(encryptor.encrypt("email", "a@b.co").unwrap()).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 1;
        assert!(encryptor.decrypt("email", &BASE64.encode(bytes)).is_err());
    }

    #[test]
    fn test_bad_keys() {
        assert!(matches!(
            AesGcmEncryptor::from_base64_key("not base64!"),
            Err(KeyError::Encoding(_))
        ));
        assert_eq!(
            AesGcmEncryptor::from_base64_key("AAAA").err(),
            Some(KeyError::Length(3))
        );
    }

    #[test]
    fn test_config_selects_encryptor() {
        let plain = encryptor_from_config(&config(None));
        assert_eq!(plain.encrypt("email", "a@b.co").unwrap(), "a@b.co");

        let sealed = encryptor_from_config(&config(Some(KEY)));
        assert_ne!(sealed.encrypt("email", "a@b.co").unwrap(), "a@b.co");

        let broken = encryptor_from_config(&config(Some("AAAA")));
        let err = broken.encrypt("email", "a@b.co").unwrap_err();
        assert_eq!(err.field, "email");
    }
}
