//! Persisted cart operations.

use tracing::instrument;

use demo_smoke_core::ProductId;

use super::Cart;
use crate::catalog::Product;
use crate::storage::{KeyValueStore, StorageError, TypedStore, keys};

/// Applies cart operations and writes the result back to the store.
///
/// Each call loads the stored cart, applies one change and saves it again,
/// so the stored cart always reflects the last mutation.
pub struct CartService<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> CartService<'a, S> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The stored cart, or an empty one if nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn load(&self) -> Result<Cart, StorageError> {
        Ok(self.store.load(keys::CART)?.unwrap_or_default())
    }

    /// Add `quantity` units of `product`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add(&self, product: &Product, quantity: u32) -> Result<Cart, StorageError> {
        self.apply(|cart| cart.add_line(product, quantity))
    }

    /// Remove the line for `product_id`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub fn remove(&self, product_id: &ProductId) -> Result<Cart, StorageError> {
        self.apply(|cart| cart.remove_line(product_id))
    }

    /// Set the quantity for `product_id`; zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub fn set_quantity(&self, product_id: &ProductId, quantity: u32) -> Result<Cart, StorageError> {
        self.apply(|cart| cart.set_quantity(product_id, quantity))
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<Cart, StorageError> {
        self.apply(Cart::cleared)
    }

    fn apply(&self, op: impl FnOnce(&Cart) -> Cart) -> Result<Cart, StorageError> {
        let next = op(&self.load()?);
        self.store.save(keys::CART, &next)?;
        tracing::debug!(
            lines = next.items().len(),
            item_count = next.item_count(),
            total = %next.total(),
            "Cart updated"
        );
        Ok(next)
    }
}
