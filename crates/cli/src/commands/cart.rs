//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! ds-cli cart add glass-001 --quantity 2
//! ds-cli cart set glass-001 1
//! ds-cli cart remove glass-001
//! ds-cli cart show
//! ds-cli cart clear
//! ```

use demo_smoke_core::ProductId;
use demo_smoke_storefront::cart::Cart;
use demo_smoke_storefront::storage::KeyValueStore;
use demo_smoke_storefront::{AppError, Storefront};

/// Log the cart's lines and totals.
fn report(cart: &Cart) {
    if cart.is_empty() {
        tracing::info!("Your cart is empty");
        return;
    }
    for line in cart.items() {
        tracing::info!(
            "{:>3} x {:<32} {:>9}",
            line.quantity,
            line.product.name,
            line.line_total().to_string()
        );
    }
    tracing::info!("{} item(s), total {}", cart.item_count(), cart.total());
}

/// Show the stored cart.
///
/// # Errors
///
/// Returns `AppError::Storage` if the cart cannot be read.
pub fn show<L: KeyValueStore, S: KeyValueStore>(shop: &Storefront<L, S>) -> Result<(), AppError> {
    report(&shop.cart().load()?);
    Ok(())
}

/// Add `quantity` units of a catalog product.
///
/// # Errors
///
/// Returns `AppError::ProductNotFound` for an unknown ID, or
/// `AppError::Storage` if the cart cannot be saved.
pub fn add<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
    id: &ProductId,
    quantity: u32,
) -> Result<(), AppError> {
    let cart = shop.add_to_cart(id, quantity)?;
    if let Some(line) = cart.line(id) {
        tracing::info!("Added {} (now {} in cart)", line.product.name, line.quantity);
    }
    report(&cart);
    Ok(())
}

/// Remove a product's line.
///
/// # Errors
///
/// Returns `AppError::Storage` if the cart cannot be saved.
pub fn remove<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
    id: &ProductId,
) -> Result<(), AppError> {
    report(&shop.cart().remove(id)?);
    Ok(())
}

/// Set a line's quantity; zero removes it.
///
/// # Errors
///
/// Returns `AppError::Storage` if the cart cannot be saved.
pub fn set_quantity<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
    id: &ProductId,
    quantity: u32,
) -> Result<(), AppError> {
    report(&shop.cart().set_quantity(id, quantity)?);
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `AppError::Storage` if the cart cannot be saved.
pub fn clear<L: KeyValueStore, S: KeyValueStore>(shop: &Storefront<L, S>) -> Result<(), AppError> {
    shop.cart().clear()?;
    tracing::info!("Cart cleared");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::test_support::shop;

    #[test]
    fn test_add_set_remove() {
        let shop = shop();
        let id = ProductId::new("glass-001");

        add(&shop, &id, 2).unwrap();
        assert_eq!(shop.cart().load().unwrap().item_count(), 2);

        set_quantity(&shop, &id, 5).unwrap();
        assert_eq!(shop.cart().load().unwrap().item_count(), 5);

        remove(&shop, &id).unwrap();
        assert!(shop.cart().load().unwrap().is_empty());
    }

    #[test]
    fn test_add_unknown_product_leaves_cart_alone() {
        let shop = shop();
        assert!(add(&shop, &ProductId::new("glass-404"), 1).is_err());
        assert!(shop.cart().load().unwrap().is_empty());
    }
}
