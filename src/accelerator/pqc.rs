//! # Description
//! - a stand-in for a post-quantum key-encapsulation engine
//! - it only reproduces the data flow and the fixed latencies of keygen,
//!   encapsulation and decapsulation
//!
//! # Warning
//! this is NOT cryptography. The shared secret is derived from the public key
//! alone, so anyone holding the public key can unmask the ciphertext. The secret
//! key is accepted by [`PqcSecurityAccelerator::decapsulate`] but never used.
use log::debug;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use super::component::Component;
use crate::settings::PqcSettings;

pub const SECRET_KEY_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: Vec<u8>,
    pub secret_key: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encapsulation {
    pub ciphertext: Vec<u8>,
    pub shared_secret: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decapsulation {
    pub plaintext: Vec<u8>,
    pub shared_secret: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PqcSecurityAccelerator {
    name: String,
    keygen_latency: f64,
    encap_latency: f64,
    decap_latency: f64,
}

impl Component for PqcSecurityAccelerator {
    fn name(&self) -> &str {
        &self.name
    }
}

fn hash(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}

/// repeat the digest of `shared_secret` until it covers `len` bytes, then truncate
pub fn mask_stream(shared_secret: &[u8], len: usize) -> Vec<u8> {
    let mask = hash(shared_secret);
    mask.iter().copied().cycle().take(len).collect()
}

fn xor_with_mask(data: &[u8], shared_secret: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(mask_stream(shared_secret, data.len()))
        .map(|(d, m)| d ^ m)
        .collect()
}

impl PqcSecurityAccelerator {
    pub fn new(settings: &PqcSettings) -> PqcSecurityAccelerator {
        PqcSecurityAccelerator {
            name: settings.name.clone(),
            keygen_latency: settings.keygen_latency,
            encap_latency: settings.encap_latency,
            decap_latency: settings.decap_latency,
        }
    }

    /// fresh 32-byte secret key from the os generator, public key is its hash
    pub fn keypair(&self) -> (KeyPair, f64) {
        let mut secret_key = vec![0u8; SECRET_KEY_LEN];
        OsRng.fill_bytes(&mut secret_key);
        let public_key = hash(&secret_key);
        debug!("{}: keypair, latency {}", self.name, self.keygen_latency);
        (
            KeyPair {
                public_key,
                secret_key,
            },
            self.keygen_latency,
        )
    }

    pub fn encapsulate(&self, public_key: &[u8], plaintext: &[u8]) -> (Encapsulation, f64) {
        let shared_secret = hash(public_key);
        let ciphertext = xor_with_mask(plaintext, &shared_secret);
        debug!(
            "{}: encapsulate {} bytes, latency {}",
            self.name,
            plaintext.len(),
            self.encap_latency
        );
        (
            Encapsulation {
                ciphertext,
                shared_secret,
            },
            self.encap_latency,
        )
    }

    /// recovers the plaintext; `_secret_key` plays no part in the derivation
    pub fn decapsulate(
        &self,
        public_key: &[u8],
        _secret_key: &[u8],
        ciphertext: &[u8],
    ) -> (Decapsulation, f64) {
        let shared_secret = hash(public_key);
        let plaintext = xor_with_mask(ciphertext, &shared_secret);
        debug!(
            "{}: decapsulate {} bytes, latency {}",
            self.name,
            ciphertext.len(),
            self.decap_latency
        );
        (
            Decapsulation {
                plaintext,
                shared_secret,
            },
            self.decap_latency,
        )
    }
}
