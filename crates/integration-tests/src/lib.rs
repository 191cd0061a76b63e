//! Integration tests for Demo Smoke.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p demo-smoke-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping` - Cart, checkout and order history end to end
//! - `accounts` - Sign-up, sign-in and profile edits
//! - `persistence` - File-backed stores across restarts
//!
//! Every test gets its own temporary data directory, so tests can run in
//! parallel.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use secrecy::SecretString;
use tempfile::TempDir;

use demo_smoke_core::Email;
use demo_smoke_storefront::Storefront;
use demo_smoke_storefront::config::StorefrontConfig;
use demo_smoke_storefront::models::User;
use demo_smoke_storefront::storage::FileStore;

/// Error type for test setup helpers.
pub type BoxError = Box<dyn std::error::Error>;

/// A file-backed storefront in a throwaway directory.
pub struct TestContext {
    dir: TempDir,
    pub shop: Storefront<FileStore>,
}

impl TestContext {
    /// Open a fresh storefront with the demo account seeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory or stores cannot be created.
    pub fn new() -> Result<Self, BoxError> {
        let dir = tempfile::tempdir()?;
        let shop = Storefront::open(config_for(dir.path()))?;
        Ok(Self { dir, shop })
    }

    /// Data directory backing this context.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a second storefront over the same directory, as a restarted
    /// process would.
    ///
    /// # Errors
    ///
    /// Returns an error if the stores cannot be opened.
    pub fn reopen(&self) -> Result<Storefront<FileStore>, BoxError> {
        Ok(Storefront::open(config_for(self.dir.path()))?)
    }

    /// Pass the age gate and sign in as the demo account.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn sign_in_demo(&self) -> Result<User, BoxError> {
        self.shop.age_gate().confirm()?;
        let email = Email::parse("demo@example.com")?;
        Ok(self.shop.auth().sign_in(&email, &password("anything"))?)
    }
}

/// Configuration rooted at `dir`.
#[must_use]
pub fn config_for(dir: &Path) -> StorefrontConfig {
    StorefrontConfig {
        data_dir: dir.to_path_buf(),
        ..StorefrontConfig::default()
    }
}

/// Wrap a test password.
#[must_use]
pub fn password(s: &str) -> SecretString {
    SecretString::from(s.to_owned())
}
