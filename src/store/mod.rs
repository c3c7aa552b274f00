//! The in-memory user store.
//!
//! Owned by the session and replaced wholesale after every successful list
//! fetch — always the most recent fetch result, in API response order.
//! There is no merge logic: a field edit mutates an entry in place, and the
//! next refetch overwrites whatever was edited.

use serde_json::Value;
use thiserror::Error;

use crate::models::{User, UserId};

/// Store-level failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no user with id {0} in the current list")]
    UnknownUser(UserId),
}

/// Ordered collection of the last-fetched user records.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Empty store; populated by the first fetch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fresh fetch result.
    pub fn replace_all(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// All records in API order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Linear lookup by id.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == Some(id))
    }

    /// Assign `value` to `key` on the user with `id`.
    pub fn set_field(&mut self, id: UserId, key: &str, value: Value) -> Result<(), StoreError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id() == Some(id))
            .ok_or(StoreError::UnknownUser(id))?;
        user.set(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users(ids: &[u64]) -> Vec<User> {
        ids.iter()
            .map(|id| serde_json::from_value(json!({ "id": id, "name": format!("u{id}") })).unwrap())
            .collect()
    }

    #[test]
    fn starts_empty() {
        let store = UserStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn replace_all_keeps_response_order() {
        let mut store = UserStore::new();
        store.replace_all(users(&[3, 1, 2]));
        let ids: Vec<_> = store.users().iter().filter_map(User::id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        store.replace_all(users(&[5]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = UserStore::new();
        store.replace_all(users(&[1, 2]));
        assert!(store.get(2).is_some());
        assert!(store.get(9).is_none());
    }

    #[test]
    fn set_field_mutates_in_place() {
        let mut store = UserStore::new();
        store.replace_all(users(&[1]));
        store.set_field(1, "name", json!("renamed")).unwrap();
        assert_eq!(store.get(1).unwrap().get("name"), Some(&json!("renamed")));
    }

    #[test]
    fn set_field_unknown_user() {
        let mut store = UserStore::new();
        store.replace_all(users(&[1]));
        assert_eq!(
            store.set_field(7, "name", json!("x")),
            Err(StoreError::UnknownUser(7))
        );
    }
}
