// src/crypto.rs
//! PIN encryption for the login form.
//!
//! The login page encrypts `"<pin>|<random number>"` with the site's RSA key
//! (PKCS#1 v1.5) and posts the ciphertext as lowercase hex. We do the same.

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Pkcs1v15Encrypt, RsaPublicKey};

use crate::config::consts::RANDOM_NO;
use crate::error::{Error, KeyError};

/// RSA public key components as published by the site.
///
/// Components are not validated until use, so a `PublicKey::default()`
/// (no modulus, no exponent) can be held and fails at encryption time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicKey {
    n: Option<BigUint>,
    e: Option<BigUint>,
}

impl PublicKey {
    /// Parse hex modulus and hex exponent.
    pub fn from_hex(modulus: &str, exponent: &str) -> Result<Self, KeyError> {
        let n = BigUint::parse_bytes(modulus.as_bytes(), 16).ok_or(KeyError::InvalidModulus)?;
        let e = u64::from_str_radix(exponent, 16)?;
        Ok(Self::from_components(n, BigUint::from(e)))
    }

    pub fn from_components(n: BigUint, e: BigUint) -> Self {
        Self { n: Some(n), e: Some(e) }
    }

    /// PKCS#1 v1.5 encryption with the OS random source.
    pub fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>, Error> {
        let key = self.to_rsa()?;
        key.encrypt(&mut OsRng, Pkcs1v15Encrypt, msg)
            .map_err(|e| Error::Encryption(e.to_string()))
    }

    fn to_rsa(&self) -> Result<RsaPublicKey, Error> {
        let n = match &self.n {
            Some(n) if *n != BigUint::from(0u32) => n.clone(),
            _ => return Err(Error::Encryption(s!("missing public modulus"))),
        };
        let e = self
            .e
            .clone()
            .ok_or_else(|| Error::Encryption(s!("missing public exponent")))?;
        RsaPublicKey::new(n, e).map_err(|e| Error::Encryption(e.to_string()))
    }
}

impl From<&RsaPublicKey> for PublicKey {
    fn from(key: &RsaPublicKey) -> Self {
        Self::from_components(key.n().clone(), key.e().clone())
    }
}

/// The plaintext the site expects: `"<pin>|<random number>"`.
pub fn pin_plaintext(pin: &str) -> String {
    join!(pin, "|", RANDOM_NO)
}

/// Encrypt a PIN for the `hdnrequest` field, rendered as lowercase hex.
pub fn encrypt_pin(key: &PublicKey, pin: &str) -> Result<String, Error> {
    let ciphertext = key.encrypt(pin_plaintext(pin).as_bytes())?;
    Ok(hex::encode(ciphertext))
}
