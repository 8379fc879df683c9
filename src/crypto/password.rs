//! Password hashing using Argon2id
//!
//! Each password gets its own random salt; the resulting PHC string carries
//! the algorithm, parameters and salt, so verification needs nothing else.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use serde::{Deserialize, Serialize};

use crate::error::{MeterError, MeterResult};

/// Cost parameters for password hashing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingParams {
    /// Memory cost in KiB (default: 19456 = 19 MiB)
    #[serde(default = "default_memory_cost")]
    pub memory_cost: u32,
    /// Time cost (iterations, default: 2)
    #[serde(default = "default_time_cost")]
    pub time_cost: u32,
    /// Parallelism degree (default: 1)
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

fn default_memory_cost() -> u32 {
    Params::DEFAULT_M_COST
}

fn default_time_cost() -> u32 {
    Params::DEFAULT_T_COST
}

fn default_parallelism() -> u32 {
    Params::DEFAULT_P_COST
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_cost: default_memory_cost(),
            time_cost: default_time_cost(),
            parallelism: default_parallelism(),
        }
    }
}

impl HashingParams {
    /// Create params with specific values
    pub fn with_values(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    fn hasher(&self) -> MeterResult<Argon2<'static>> {
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| MeterError::Crypto(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hash a password with a fresh random salt
///
/// Returns the PHC string (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`).
pub fn hash_password(password: &str, params: &HashingParams) -> MeterResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = params
        .hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| MeterError::Crypto(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC string
///
/// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
/// The hash comparison itself is constant-time.
pub fn verify_password(password: &str, phc: &str) -> MeterResult<bool> {
    let parsed = PasswordHash::new(phc)
        .map_err(|e| MeterError::Crypto(format!("Malformed password hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(MeterError::Crypto(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
