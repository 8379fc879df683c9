//! User repository
//!
//! Holds registered users indexed by id and by username.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{MeterError, MeterResult};
use crate::models::{User, UserId};

use super::{read_poisoned, write_poisoned};

#[derive(Default)]
struct UserIndex {
    by_id: HashMap<UserId, User>,
    /// Index: username (exact, case-sensitive) -> user_id
    by_username: HashMap<String, UserId>,
}

/// Repository for registered users
#[derive(Default)]
pub struct UserRepository {
    data: RwLock<UserIndex>,
}

impl UserRepository {
    /// Create an empty user repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate an id that no stored user has
    pub fn next_id(&self) -> MeterResult<UserId> {
        let data = self.data.read().map_err(read_poisoned)?;

        let mut id = UserId::new();
        while data.by_id.contains_key(&id) {
            id = UserId::new();
        }
        Ok(id)
    }

    /// Insert a new user
    ///
    /// Fails with `DuplicateUsername` if the username is taken. The check and
    /// the insert happen under the same lock.
    pub fn insert(&self, user: User) -> MeterResult<()> {
        let mut data = self.data.write().map_err(write_poisoned)?;

        if data.by_username.contains_key(&user.username) {
            return Err(MeterError::DuplicateUsername(user.username));
        }
        if data.by_id.contains_key(&user.id) {
            return Err(MeterError::Storage(format!(
                "User id {} is already in use",
                user.id
            )));
        }

        data.by_username.insert(user.username.clone(), user.id);
        data.by_id.insert(user.id, user);
        Ok(())
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> MeterResult<Option<User>> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.by_id.get(&id).cloned())
    }

    /// Get a user by exact username
    pub fn get_by_username(&self, username: &str) -> MeterResult<Option<User>> {
        let data = self.data.read().map_err(read_poisoned)?;

        Ok(data
            .by_username
            .get(username)
            .and_then(|id| data.by_id.get(id))
            .cloned())
    }

    /// Check whether a username is registered
    pub fn username_exists(&self, username: &str) -> MeterResult<bool> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.by_username.contains_key(username))
    }

    /// Count users
    pub fn count(&self) -> MeterResult<usize> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.by_id.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn test_user(name: &str) -> User {
        User::new(UserId::new(), name, "hash", Role::User)
    }

    #[test]
    fn test_empty_repository() {
        let repo = UserRepository::new();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_by_username("alice").unwrap().is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let repo = UserRepository::new();
        let user = test_user("alice");
        let id = user.id;

        repo.insert(user).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().username, "alice");
        assert_eq!(repo.get_by_username("alice").unwrap().unwrap().id, id);
        assert!(repo.username_exists("alice").unwrap());
    }

    #[test]
    fn test_username_is_case_sensitive() {
        let repo = UserRepository::new();
        repo.insert(test_user("Alice")).unwrap();

        assert!(repo.get_by_username("alice").unwrap().is_none());
        repo.insert(test_user("alice")).unwrap();
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let repo = UserRepository::new();
        repo.insert(test_user("alice")).unwrap();

        let result = repo.insert(test_user("alice"));
        assert!(matches!(result, Err(MeterError::DuplicateUsername(name)) if name == "alice"));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let repo = UserRepository::new();
        let first = test_user("alice");
        let mut second = test_user("bob");
        second.id = first.id;

        repo.insert(first).unwrap();
        assert!(matches!(repo.insert(second), Err(MeterError::Storage(_))));
        assert!(repo.get_by_username("bob").unwrap().is_none());
    }

    #[test]
    fn test_next_id_is_unused() {
        let repo = UserRepository::new();
        let user = test_user("alice");
        let taken = user.id;
        repo.insert(user).unwrap();

        for _ in 0..100 {
            assert_ne!(repo.next_id().unwrap(), taken);
        }
    }
}
