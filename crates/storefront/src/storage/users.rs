//! User repository over the key-value store.
//!
//! Accounts live as one JSON list under [`keys::USERS`]; the signed-in
//! account is a separate copy under [`keys::CURRENT_USER`].

use demo_smoke_core::{Email, UserId};

use super::{KeyValueStore, StorageError, TypedStore, keys};
use crate::models::User;

/// Repository for stored accounts.
pub struct UserRepository<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> UserRepository<'a, S> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Every stored account, in sign-up order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn list(&self) -> Result<Vec<User>, StorageError> {
        Ok(self.store.load(keys::USERS)?.unwrap_or_default())
    }

    /// Find an account by exact email match.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn find_by_email(&self, email: &Email) -> Result<Option<User>, StorageError> {
        Ok(self.list()?.into_iter().find(|u| &u.email == email))
    }

    /// Find an account by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StorageError> {
        Ok(self.list()?.into_iter().find(|u| &u.id == id))
    }

    /// Append an account to the list.
    ///
    /// Uniqueness is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    pub fn insert(&self, user: &User) -> Result<(), StorageError> {
        let mut users = self.list()?;
        users.push(user.clone());
        self.store.save(keys::USERS, &users)
    }

    /// Replace the stored account with the same ID.
    ///
    /// Returns `false` if no account has that ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    pub fn replace(&self, user: &User) -> Result<bool, StorageError> {
        let mut users = self.list()?;
        let Some(slot) = users.iter_mut().find(|u| u.id == user.id) else {
            return Ok(false);
        };
        *slot = user.clone();
        self.store.save(keys::USERS, &users)?;
        Ok(true)
    }

    /// The signed-in account, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn current(&self) -> Result<Option<User>, StorageError> {
        self.store.load(keys::CURRENT_USER)
    }

    /// Record `user` as signed in.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub fn set_current(&self, user: &User) -> Result<(), StorageError> {
        self.store.save(keys::CURRENT_USER, user)
    }

    /// Forget the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub fn clear_current(&self) -> Result<(), StorageError> {
        self.store.clear(keys::CURRENT_USER)
    }
}
