//! User service
//!
//! Registration, authentication and lookups over the user repository.

use std::sync::OnceLock;

use crate::crypto::{hash_password, verify_password, HashingParams};
use crate::error::{MeterError, MeterResult};
use crate::models::{Role, User, UserId};
use crate::storage::Storage;

/// Password checked against when the username is unknown, so a miss costs
/// the same as a wrong password.
const DECOY_PASSWORD: &str = "meterbook-decoy-password";

/// Service for user registration and authentication
pub struct UserService<'a> {
    storage: &'a Storage,
    hashing: HashingParams,
    decoy_hash: OnceLock<Option<String>>,
}

impl<'a> UserService<'a> {
    /// Create a new user service with default hashing parameters
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_hashing(storage, HashingParams::default())
    }

    /// Create a new user service with explicit hashing parameters
    pub fn with_hashing(storage: &'a Storage, hashing: HashingParams) -> Self {
        Self {
            storage,
            hashing,
            decoy_hash: OnceLock::new(),
        }
    }

    /// Register a new user
    ///
    /// Usernames are matched exactly (case-sensitive).
    pub fn register(&self, username: &str, password: &str, role: Role) -> MeterResult<User> {
        if self.storage.users.username_exists(username)? {
            return Err(MeterError::DuplicateUsername(username.to_string()));
        }

        let password_hash = hash_password(password, &self.hashing)?;
        let id = self.storage.users.next_id()?;
        let user = User::new(id, username, password_hash, role);

        self.storage.users.insert(user.clone())?;

        Ok(user)
    }

    /// Authenticate a user by username and password
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    pub fn authenticate(&self, username: &str, password: &str) -> MeterResult<User> {
        let Some(user) = self.storage.users.get_by_username(username)? else {
            self.verify_decoy(password);
            return Err(MeterError::InvalidCredentials);
        };

        if verify_password(password, &user.password_hash)? {
            Ok(user)
        } else {
            Err(MeterError::InvalidCredentials)
        }
    }

    fn verify_decoy(&self, password: &str) {
        let decoy = self
            .decoy_hash
            .get_or_init(|| hash_password(DECOY_PASSWORD, &self.hashing).ok());

        if let Some(hash) = decoy {
            // Result ignored; the call only equalizes timing with a real verify.
            let _ = verify_password(password, hash);
        }
    }

    /// Get a user by exact username
    pub fn find_by_username(&self, username: &str) -> MeterResult<Option<User>> {
        self.storage.users.get_by_username(username)
    }

    /// Get a user by ID
    pub fn find_by_id(&self, id: UserId) -> MeterResult<Option<User>> {
        self.storage.users.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_service(storage: &Storage) -> UserService<'_> {
        UserService::with_hashing(storage, HashingParams::with_values(1024, 1, 1))
    }

    #[test]
    fn test_register_user() {
        let storage = Storage::new();
        let service = fast_service(&storage);

        let user = service.register("u", "p", Role::User).unwrap();
        assert_eq!(user.username, "u");
        assert_eq!(user.role, Role::User);
        assert_ne!(user.password_hash, "p");
    }

    #[test]
    fn test_duplicate_username() {
        let storage = Storage::new();
        let service = fast_service(&storage);

        service.register("u", "p", Role::User).unwrap();
        let result = service.register("u", "other", Role::Admin);

        assert!(matches!(result, Err(MeterError::DuplicateUsername(_))));
        assert_eq!(storage.users.count().unwrap(), 1);
        assert_eq!(
            service.find_by_username("u").unwrap().unwrap().role,
            Role::User
        );
    }

    #[test]
    fn test_authenticate() {
        let storage = Storage::new();
        let service = fast_service(&storage);
        service.register("u", "p", Role::User).unwrap();

        let user = service.authenticate("u", "p").unwrap();
        assert_eq!(user.username, "u");
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let storage = Storage::new();
        let service = fast_service(&storage);
        service.register("u", "p", Role::User).unwrap();

        let result = service.authenticate("u", "wrong");
        assert!(matches!(result, Err(MeterError::InvalidCredentials)));
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let storage = Storage::new();
        let service = fast_service(&storage);

        let unknown = service.authenticate("nobody", "p").unwrap_err();
        service.register("u", "p", Role::User).unwrap();
        let wrong = service.authenticate("u", "x").unwrap_err();

        assert!(matches!(unknown, MeterError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[test]
    fn test_authenticate_is_case_sensitive() {
        let storage = Storage::new();
        let service = fast_service(&storage);
        service.register("Alice", "p", Role::User).unwrap();

        assert!(service.authenticate("alice", "p").is_err());
        assert!(service.authenticate("Alice", "P").is_err());
    }

    #[test]
    fn test_lookups() {
        let storage = Storage::new();
        let service = fast_service(&storage);
        let user = service.register("admin", "secret", Role::Admin).unwrap();

        let by_id = service.find_by_id(user.id).unwrap().unwrap();
        assert_eq!(by_id.username, "admin");
        assert!(service.find_by_id(UserId::new()).unwrap().is_none());
        assert!(service.find_by_username("missing").unwrap().is_none());
    }

    #[test]
    fn test_unique_ids() {
        let storage = Storage::new();
        let service = fast_service(&storage);

        let a = service.register("a", "p", Role::User).unwrap();
        let b = service.register("b", "p", Role::User).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(storage.users.count().unwrap(), 2);
    }
}
