//! PBKDF2-HMAC-SHA256 implementation of the `PasswordHasher` trait.
//!
//! Hashes are stored in the self-describing form
//! `pbkdf2_sha256$<iterations>$<hex salt>$<hex key>`, so the iteration count can
//! be raised later without invalidating existing accounts.

use constant_time_eq::constant_time_eq;
use pbkdf2::hmac::Hmac;
use rand::RngCore;
use sha2::Sha256;
use tracing::warn;

use crate::errors::AdapterError;
use crate::PasswordHasher;

const SCHEME: &str = "pbkdf2_sha256";
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Iteration count recommended for PBKDF2-HMAC-SHA256.
pub const DEFAULT_ITERATIONS: u32 = 600_000;

#[derive(Debug, Clone)]
pub struct Pbkdf2Hasher {
    iterations: u32,
}

impl Pbkdf2Hasher {
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for Pbkdf2Hasher {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

fn derive_key(plain: &str, salt: &[u8], iterations: u32) -> Result<Vec<u8>, AdapterError> {
    let mut output = vec![0u8; KEY_LEN];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(plain.as_bytes(), salt, iterations, &mut output)
        .map_err(|err| AdapterError::Hashing(err.to_string()))?;
    Ok(output)
}

impl PasswordHasher for Pbkdf2Hasher {
    fn hash(&self, plain: &str) -> Result<String, AdapterError> {
        if self.iterations == 0 {
            return Err(AdapterError::Hashing(
                "iteration count must be positive".to_string(),
            ));
        }

        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);

        let key = derive_key(plain, &salt, self.iterations)?;
        Ok(format!(
            "{}${}${}${}",
            SCHEME,
            self.iterations,
            hex::encode(salt),
            hex::encode(key)
        ))
    }

    fn verify(&self, plain: &str, hash: &str) -> bool {
        let parts: Vec<&str> = hash.split('$').collect();
        if parts.len() != 4 || parts[0] != SCHEME {
            warn!("Unknown password hash format");
            return false;
        }

        let iterations: u32 = match parts[1].parse() {
            Ok(i) if i > 0 => i,
            _ => return false,
        };
        let (salt, expected) = match (hex::decode(parts[2]), hex::decode(parts[3])) {
            (Ok(salt), Ok(expected)) => (salt, expected),
            _ => return false,
        };

        match derive_key(plain, &salt, iterations) {
            Ok(computed) => constant_time_eq(&computed, &expected),
            Err(_) => false,
        }
    }
}
