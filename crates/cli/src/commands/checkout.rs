//! Checkout commands.
//!
//! # Usage
//!
//! ```bash
//! ds-cli checkout slots
//! ds-cli checkout summary
//! ds-cli checkout submit --pickup-time 14:00
//! ds-cli checkout submit --order-type delivery --phone "(555) 222-3333"
//! ```

use demo_smoke_storefront::checkout::DetailsForm;
use demo_smoke_storefront::models::CustomerInfo;
use demo_smoke_storefront::storage::KeyValueStore;
use demo_smoke_storefront::{AppError, Storefront};

/// Contact fields given on the command line. Unset fields fall back to the
/// signed-in profile.
#[derive(Debug, Clone, Default)]
pub struct ContactOverrides {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactOverrides {
    fn over(self, defaults: CustomerInfo) -> CustomerInfo {
        CustomerInfo {
            first_name: self.first_name.unwrap_or(defaults.first_name),
            last_name: self.last_name.unwrap_or(defaults.last_name),
            email: self.email.unwrap_or(defaults.email),
            phone: self.phone.unwrap_or(defaults.phone),
        }
    }
}

/// List the pickup times on offer.
pub fn slots<L: KeyValueStore, S: KeyValueStore>(shop: &Storefront<L, S>) {
    for slot in shop.checkout().slots() {
        tracing::info!("{:>8}  (--pickup-time {})", slot.label, slot.value);
    }
}

/// Show subtotal, estimated tax and total for the cart.
///
/// # Errors
///
/// Returns `AppError::Checkout` if the cart cannot be read.
pub fn summary<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
) -> Result<(), AppError> {
    let summary = shop.checkout().summary()?;
    tracing::info!("Items:    {}", summary.item_count);
    tracing::info!("Subtotal: {}", summary.subtotal);
    tracing::info!("Tax:      {}", summary.tax);
    tracing::info!("Total:    {}", summary.total);
    Ok(())
}

/// Place the order for the cart.
///
/// # Errors
///
/// Returns `AppError::Checkout` if the details are rejected, nobody is
/// signed in, the cart is empty, or the order cannot be saved.
pub fn submit<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
    contact: ContactOverrides,
    details: &DetailsForm,
) -> Result<(), AppError> {
    let checkout = shop.checkout();
    let contact = contact.over(checkout.contact_defaults()?);
    let order = checkout.submit(contact, details)?;

    tracing::info!("Order confirmed: #{}", order.short_id());
    tracing::info!(
        "{} item(s), total {} ({})",
        order.item_count(),
        order.total,
        order.status
    );
    match &order.pickup_time {
        Some(time) => tracing::info!("Pick up at {time}"),
        None => tracing::info!("We'll deliver to you soon"),
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use demo_smoke_core::{Email, OrderType, ProductId};
    use demo_smoke_storefront::checkout::CheckoutError;
    use secrecy::SecretString;

    use super::*;
    use crate::commands::test_support::shop;

    fn pickup(time: &str) -> DetailsForm {
        DetailsForm {
            order_type: OrderType::Pickup,
            pickup_time: Some(time.to_string()),
        }
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let defaults = CustomerInfo {
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            email: "demo@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
        };
        let merged = ContactOverrides {
            phone: Some("(555) 999-0000".to_string()),
            ..ContactOverrides::default()
        }
        .over(defaults);
        assert_eq!(merged.first_name, "Demo");
        assert_eq!(merged.phone, "(555) 999-0000");
    }

    #[test]
    fn test_submit_with_profile_defaults() {
        let shop = shop();
        shop.auth()
            .sign_in(
                &Email::parse("demo@example.com").unwrap(),
                &SecretString::from("pw".to_owned()),
            )
            .unwrap();
        shop.add_to_cart(&ProductId::new("lighter-001"), 2).unwrap();

        submit(&shop, ContactOverrides::default(), &pickup("2:00 PM")).unwrap();

        assert!(shop.cart().load().unwrap().is_empty());
        let user = shop.auth().current_user().unwrap().unwrap();
        let orders = shop.orders().user_orders(&user.id).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].customer_info.first_name, "Demo");
    }

    #[test]
    fn test_submit_signed_out_fails_validation_first() {
        let shop = shop();
        let err = submit(&shop, ContactOverrides::default(), &pickup("14:00")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Checkout(CheckoutError::Invalid(_))
        ));
    }
}
