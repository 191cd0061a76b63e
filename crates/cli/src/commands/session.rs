//! Age gate and session commands.
//!
//! # Usage
//!
//! ```bash
//! ds-cli age confirm
//! ds-cli age status
//! ds-cli session end
//! ```

use demo_smoke_storefront::Storefront;
use demo_smoke_storefront::services::age_gate::MINIMUM_AGE;
use demo_smoke_storefront::storage::{KeyValueStore, StorageError};

/// Record that the visitor is of age for this session.
///
/// # Errors
///
/// Returns `StorageError` if the session store cannot be written.
pub fn confirm_age<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
) -> Result<(), StorageError> {
    shop.age_gate().confirm()?;
    tracing::info!("Age confirmed ({MINIMUM_AGE}+). Welcome to Demo Smoke.");
    Ok(())
}

/// Report whether the age gate has been passed.
///
/// # Errors
///
/// Returns `StorageError` if the session store cannot be read.
pub fn age_status<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
) -> Result<(), StorageError> {
    if shop.age_gate().is_verified()? {
        tracing::info!("Age verified for this session");
    } else {
        tracing::info!("Age not verified. Run `ds-cli age confirm` if you are {MINIMUM_AGE} or older.");
    }
    Ok(())
}

/// End the session.
///
/// # Errors
///
/// Returns `StorageError` if the session store cannot be written.
pub fn end<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
) -> Result<(), StorageError> {
    shop.end_session()?;
    tracing::info!("Session ended");
    Ok(())
}
