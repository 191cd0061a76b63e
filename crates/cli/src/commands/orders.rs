//! Order history.
//!
//! # Usage
//!
//! ```bash
//! ds-cli orders list
//! ```

use demo_smoke_storefront::models::Order;
use demo_smoke_storefront::services::AuthError;
use demo_smoke_storefront::storage::KeyValueStore;
use demo_smoke_storefront::{AppError, Storefront};

/// The signed-in user's orders in the order they were placed.
fn history<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
) -> Result<Vec<Order>, AppError> {
    let user = shop.auth().current_user()?.ok_or(AuthError::NotSignedIn)?;
    Ok(shop.orders().user_orders(&user.id)?)
}

/// List the signed-in user's orders, oldest first.
///
/// # Errors
///
/// Returns `AppError::Auth` if nobody is signed in, or `AppError::Order`
/// if the orders cannot be read.
pub fn list<L: KeyValueStore, S: KeyValueStore>(shop: &Storefront<L, S>) -> Result<(), AppError> {
    let orders = history(shop)?;
    if orders.is_empty() {
        tracing::info!("No orders yet");
        return Ok(());
    }

    for order in &orders {
        tracing::info!(
            "#{}  {}  {:<10} {:>9}  {} item(s)",
            order.short_id(),
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.status.as_str(),
            order.total.to_string(),
            order.item_count()
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use demo_smoke_core::{Email, ProductId};
    use demo_smoke_storefront::models::{CustomerInfo, OrderDetails};
    use secrecy::SecretString;

    use super::*;
    use crate::commands::test_support::shop;

    #[test]
    fn test_list_requires_sign_in() {
        let shop = shop();
        assert!(matches!(
            list(&shop),
            Err(AppError::Auth(AuthError::NotSignedIn))
        ));
    }

    #[test]
    fn test_history_keeps_placement_order() {
        let shop = shop();
        shop.auth()
            .sign_in(
                &Email::parse("demo@example.com").unwrap(),
                &SecretString::from("pw".to_owned()),
            )
            .unwrap();

        let mut placed = Vec::new();
        for id in ["paper-001", "glass-003", "cbd-001"] {
            let cart = shop.add_to_cart(&ProductId::new(id), 1).unwrap();
            let order = shop
                .orders()
                .create_order(cart.items(), CustomerInfo::default(), OrderDetails::default())
                .unwrap();
            shop.cart().clear().unwrap();
            placed.push(order.id);
        }

        let listed: Vec<_> = history(&shop).unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(listed, placed);
        list(&shop).unwrap();
    }
}
