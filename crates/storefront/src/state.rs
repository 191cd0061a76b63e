//! Storefront state shared by every front-end action.

use demo_smoke_core::{ProductCategory, ProductId};

use crate::cart::{Cart, CartService};
use crate::catalog::{Catalog, Product};
use crate::checkout::Checkout;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::services::{AgeGate, AuthService, OrderService};
use crate::storage::{FileStore, KeyValueStore, StorageError};

/// The shop: catalog, configuration and the two storage scopes.
///
/// `L` is the persistent store (cart, accounts, orders); `S` is the
/// session store (age gate). Services are handed out as short-lived borrows.
pub struct Storefront<L: KeyValueStore, S: KeyValueStore = L> {
    config: StorefrontConfig,
    catalog: Catalog,
    local: L,
    session: S,
}

impl Storefront<FileStore> {
    /// Open the file-backed stores named by `config`.
    ///
    /// Seeds the demo account if configured to.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if a store directory cannot be created,
    /// or `AppError::Auth` if seeding fails.
    pub fn open(config: StorefrontConfig) -> Result<Self> {
        let local = FileStore::open(config.data_dir())?;
        let session = FileStore::open(config.session_dir())?;
        tracing::debug!(data_dir = %local.dir().display(), "Opened storefront data");
        Self::new(config, local, session)
    }
}

impl<L: KeyValueStore, S: KeyValueStore> Storefront<L, S> {
    /// Create a storefront over explicit stores with the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` if seeding the demo account fails.
    pub fn new(config: StorefrontConfig, local: L, session: S) -> Result<Self> {
        let storefront = Self {
            config,
            catalog: Catalog::demo(),
            local,
            session,
        };
        if storefront.config.seed_demo_user {
            storefront.auth().seed_demo_user()?;
        }
        Ok(storefront)
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Persistent store.
    #[must_use]
    pub const fn local(&self) -> &L {
        &self.local
    }

    /// Session-scoped store.
    #[must_use]
    pub const fn session(&self) -> &S {
        &self.session
    }

    #[must_use]
    pub const fn cart(&self) -> CartService<'_, L> {
        CartService::new(&self.local)
    }

    #[must_use]
    pub const fn auth(&self) -> AuthService<'_, L> {
        AuthService::new(&self.local)
    }

    #[must_use]
    pub const fn orders(&self) -> OrderService<'_, L> {
        OrderService::new(&self.local)
    }

    #[must_use]
    pub const fn checkout(&self) -> Checkout<'_, L> {
        Checkout::new(&self.local, self.config.pickup_hours)
    }

    #[must_use]
    pub const fn age_gate(&self) -> AgeGate<'_, S> {
        AgeGate::new(&self.session)
    }

    /// Fail unless the age gate was passed this session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AgeNotVerified` if it was not.
    pub fn require_age_verified(&self) -> Result<()> {
        if self.age_gate().is_verified()? {
            Ok(())
        } else {
            Err(AppError::AgeNotVerified)
        }
    }

    /// End the browsing session. Every session-scoped key is deleted; the
    /// persistent store is untouched.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session store cannot be written.
    pub fn end_session(&self) -> std::result::Result<(), StorageError> {
        self.session.purge()
    }

    /// Look up a product.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ProductNotFound` for unknown IDs.
    pub fn product(&self, id: &ProductId) -> Result<&Product> {
        self.catalog
            .get(id)
            .ok_or_else(|| AppError::ProductNotFound(id.clone()))
    }

    /// Resolve a category URL slug.
    ///
    /// # Errors
    ///
    /// Returns `AppError::CategoryNotFound` for unknown slugs.
    pub fn category(&self, slug: &str) -> Result<ProductCategory> {
        ProductCategory::from_slug(slug).ok_or_else(|| AppError::CategoryNotFound(slug.to_owned()))
    }

    /// Add a catalog product to the cart by ID.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ProductNotFound` for unknown IDs, or
    /// `AppError::Storage` if the cart cannot be saved.
    pub fn add_to_cart(&self, id: &ProductId, quantity: u32) -> Result<Cart> {
        let product = self.product(id)?;
        Ok(self.cart().add(product, quantity)?)
    }
}
