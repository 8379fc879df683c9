//! Credential hashing for meterbook
//!
//! Passwords are stored as salted Argon2id hashes in PHC string format and
//! verified through the Argon2 password verifier.

pub mod password;

pub use password::{hash_password, verify_password, HashingParams};
