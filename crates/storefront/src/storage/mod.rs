//! Key-value persistence for the storefront.
//!
//! Everything the shop remembers lives in a flat key-value store holding
//! whole JSON documents, the same model as browser local storage:
//!
//! | Key | Value | Scope |
//! |---|---|---|
//! | `demoSmokeCart` | [`Cart`] | local |
//! | `demo_smoke_users` | list of [`User`] | local |
//! | `demo_smoke_current_user` | [`User`] | local |
//! | `demo_smoke_orders` | list of [`Order`] | local |
//! | `ageVerified` | `bool` | session |
//!
//! Writes replace the whole value (last write wins). There is no indexing,
//! locking or versioning. A value that fails to decode is logged and treated
//! as absent, so a corrupt record resets that one key instead of wedging the
//! shop.
//!
//! # Backends
//!
//! - [`MemoryStore`] - in-process map, used by tests and embedders
//! - [`FileStore`] - one JSON file per key inside a directory

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod file;
pub mod memory;
pub mod orders;
pub mod users;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use orders::OrderRepository;
pub use users::UserRepository;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        /// Key being written.
        key: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The key cannot be represented by this backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A string-to-string store with `get`/`set`/`remove`.
///
/// Methods take `&self`: a store is shared by every service that borrows it,
/// and backends use interior mutability where they need it. The storefront is
/// single-threaded, so implementations need not be `Sync`.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Delete every key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn purge(&self) -> Result<(), StorageError>;
}

/// A storage key bound to the type of value stored under it.
pub struct StorageKey<T> {
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> StorageKey<T> {
    /// Declare a typed key.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _value: PhantomData,
        }
    }

    /// The raw key name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for StorageKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StorageKey<T> {}

impl<T> std::fmt::Debug for StorageKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StorageKey").field(&self.name).finish()
    }
}

/// Storage keys used by the storefront.
pub mod keys {
    use super::StorageKey;
    use crate::cart::Cart;
    use crate::models::{Order, User};

    /// Persisted shopping cart.
    pub const CART: StorageKey<Cart> = StorageKey::new("demoSmokeCart");

    /// Every registered account, in sign-up order.
    pub const USERS: StorageKey<Vec<User>> = StorageKey::new("demo_smoke_users");

    /// The signed-in account, absent when signed out.
    pub const CURRENT_USER: StorageKey<User> = StorageKey::new("demo_smoke_current_user");

    /// Every order placed, in creation order.
    pub const ORDERS: StorageKey<Vec<Order>> = StorageKey::new("demo_smoke_orders");

    /// Session flag set once the visitor passes the age gate.
    pub const AGE_VERIFIED: StorageKey<bool> = StorageKey::new("ageVerified");
}

/// Typed JSON access on top of any [`KeyValueStore`].
pub trait TypedStore: KeyValueStore {
    /// Load and decode the value under `key`.
    ///
    /// Malformed JSON is logged and reported as `None`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the backend itself fails.
    fn load<T: DeserializeOwned>(&self, key: StorageKey<T>) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.get(key.name())? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key = key.name(), error = %e, "Discarding malformed stored value");
                Ok(None)
            }
        }
    }

    /// Encode `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the backend write fails.
    fn save<T: Serialize>(&self, key: StorageKey<T>, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.name().to_owned(),
            source,
        })?;
        self.set(key.name(), &raw)
    }

    /// Remove the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend write fails.
    fn clear<T>(&self, key: StorageKey<T>) -> Result<(), StorageError> {
        self.remove(key.name())
    }
}

impl<S: KeyValueStore + ?Sized> TypedStore for S {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const NUMBERS: StorageKey<Vec<u32>> = StorageKey::new("numbers");

    #[test]
    fn test_load_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load(NUMBERS).unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        store.save(NUMBERS, &vec![1, 2, 3]).unwrap();
        assert_eq!(store.get("numbers").unwrap().as_deref(), Some("[1,2,3]"));
        assert_eq!(store.load(NUMBERS).unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("numbers", "{not json").unwrap();
        assert_eq!(store.load(NUMBERS).unwrap(), None);
    }

    #[test]
    fn test_wrong_shape_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("numbers", "{\"a\":1}").unwrap();
        assert_eq!(store.load(NUMBERS).unwrap(), None);
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.save(NUMBERS, &vec![7]).unwrap();
        store.clear(NUMBERS).unwrap();
        assert_eq!(store.load(NUMBERS).unwrap(), None);
        // Clearing twice is fine.
        store.clear(NUMBERS).unwrap();
    }

    #[test]
    fn test_key_debug() {
        assert_eq!(format!("{:?}", keys::CART), "StorageKey(\"demoSmokeCart\")");
    }
}
