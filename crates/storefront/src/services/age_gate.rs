//! Age verification gate.
//!
//! Visitors confirm they are of legal age once per session. The flag lives in
//! the session store, so ending the session shows the gate again.

use crate::storage::{KeyValueStore, StorageError, TypedStore, keys};

/// Minimum age to enter the shop.
pub const MINIMUM_AGE: u8 = 21;

/// Reads and writes the session's age-verified flag.
pub struct AgeGate<'a, S: KeyValueStore + ?Sized> {
    session: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> AgeGate<'a, S> {
    /// Create a gate over the session-scoped store.
    #[must_use]
    pub const fn new(session: &'a S) -> Self {
        Self { session }
    }

    /// Whether the visitor has confirmed their age this session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn is_verified(&self) -> Result<bool, StorageError> {
        Ok(self.session.load(keys::AGE_VERIFIED)?.unwrap_or(false))
    }

    /// Record that the visitor is at least [`MINIMUM_AGE`].
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub fn confirm(&self) -> Result<(), StorageError> {
        self.session.save(keys::AGE_VERIFIED, &true)?;
        tracing::info!("Age verified for this session");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_unverified_by_default() {
        let session = MemoryStore::new();
        assert!(!AgeGate::new(&session).is_verified().unwrap());
    }

    #[test]
    fn test_confirm_then_purge_session() {
        let session = MemoryStore::new();
        let gate = AgeGate::new(&session);
        gate.confirm().unwrap();
        assert!(gate.is_verified().unwrap());
        assert_eq!(session.get("ageVerified").unwrap().as_deref(), Some("true"));

        session.purge().unwrap();
        assert!(!gate.is_verified().unwrap());
    }

    #[test]
    fn test_stored_false_is_unverified() {
        let session = MemoryStore::new();
        session.set("ageVerified", "false").unwrap();
        assert!(!AgeGate::new(&session).is_verified().unwrap());
    }
}
