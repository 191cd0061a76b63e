//! Checkout flow.
//!
//! Checkout runs in three steps: contact details, fulfilment details, then
//! confirmation. Payment is taken in store, so the last step only places the
//! order. Each step's checks are exposed separately so a front end can gate
//! its navigation on them; [`Checkout::submit`] runs them all again before
//! anything is written.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;

use demo_smoke_core::{OrderType, Price};

use crate::cart::{Cart, CartService};
use crate::forms::{ValidationErrors, non_blank};
use crate::models::{CustomerInfo, Order, OrderDetails, User};
use crate::services::orders::{OrderError, OrderService};
use crate::storage::{KeyValueStore, StorageError, UserRepository};

/// Estimated sales tax shown at checkout, as a fraction.
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Errors that can occur while checking out.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// One or more fields were rejected.
    #[error("invalid checkout details: {0}")]
    Invalid(#[from] ValidationErrors),

    /// Orders can only be placed by a signed-in user.
    #[error("must be signed in to check out")]
    NotSignedIn,

    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// Placing the order failed.
    #[error("order error: {0}")]
    Order(#[from] OrderError),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Store opening hours used to offer pickup slots, on the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupHours {
    /// First slot hour.
    pub open: u8,
    /// Last slot hour, inclusive.
    pub close: u8,
}

impl Default for PickupHours {
    fn default() -> Self {
        Self { open: 10, close: 20 }
    }
}

impl PickupHours {
    /// One slot per hour from `open` to `close` inclusive.
    #[must_use]
    pub fn slots(&self) -> Vec<PickupSlot> {
        (self.open..=self.close.min(23)).map(PickupSlot::at).collect()
    }
}

/// A pickup time the customer can choose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupSlot {
    pub hour: u8,
    /// 24-hour form, e.g. `14:00`.
    pub value: String,
    /// 12-hour form shown to customers, e.g. `2:00 PM`.
    pub label: String,
}

impl PickupSlot {
    fn at(hour: u8) -> Self {
        let (display_hour, meridiem) = match hour {
            0 => (12, "AM"),
            1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            _ => (hour - 12, "PM"),
        };
        Self {
            hour,
            value: format!("{hour}:00"),
            label: format!("{display_hour}:00 {meridiem}"),
        }
    }

    fn matches(&self, choice: &str) -> bool {
        choice == self.value || choice.eq_ignore_ascii_case(&self.label)
    }
}

/// Fulfilment choices as entered, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsForm {
    pub order_type: OrderType,
    /// Slot value or label.
    pub pickup_time: Option<String>,
}

/// Step 1: every contact field is required.
///
/// # Errors
///
/// Returns `ValidationErrors` naming each blank field.
pub fn validate_contact(contact: &CustomerInfo) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for (field, value, message) in [
        ("firstName", &contact.first_name, "First name is required"),
        ("lastName", &contact.last_name, "Last name is required"),
        ("email", &contact.email, "Email is required"),
        ("phone", &contact.phone, "Phone is required"),
    ] {
        if value.trim().is_empty() {
            errors.add(field, message);
        }
    }
    errors.into_result(())
}

/// Step 2: pickup needs one of the offered slots; delivery needs nothing.
///
/// The chosen slot is stored by its customer-facing label.
///
/// # Errors
///
/// Returns `ValidationErrors` if a pickup time is missing or not offered.
pub fn validate_details(
    form: &DetailsForm,
    hours: PickupHours,
) -> Result<OrderDetails, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !form.order_type.requires_pickup_time() {
        return errors.into_result(OrderDetails {
            order_type: form.order_type,
            pickup_time: None,
        });
    }

    let pickup_time = match non_blank(form.pickup_time.as_deref()) {
        None => {
            errors.add("pickupTime", "Please select a pickup time");
            None
        }
        Some(choice) => {
            let slot = hours.slots().into_iter().find(|s| s.matches(&choice));
            if slot.is_none() {
                errors.add("pickupTime", "Please choose one of the available pickup times");
            }
            slot.map(|s| s.label)
        }
    };

    errors.into_result(OrderDetails {
        order_type: form.order_type,
        pickup_time,
    })
}

/// Contact fields prefilled from `user`'s profile.
#[must_use]
pub fn contact_from_user(user: &User) -> CustomerInfo {
    CustomerInfo {
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        email: user.email.to_string(),
        phone: user.phone.clone().unwrap_or_default(),
    }
}

/// Order totals shown before confirming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub item_count: u32,
    pub subtotal: Price,
    /// Estimated tax at [`tax_rate`].
    pub tax: Price,
    pub total: Price,
}

impl CheckoutSummary {
    /// Totals for `cart`.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        let subtotal = cart.total();
        let tax = subtotal.percent(tax_rate());
        Self {
            item_count: cart.item_count(),
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Runs checkout against the stored cart and signed-in user.
pub struct Checkout<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    hours: PickupHours,
}

impl<'a, S: KeyValueStore + ?Sized> Checkout<'a, S> {
    /// Create a checkout over `store` offering slots within `hours`.
    #[must_use]
    pub const fn new(store: &'a S, hours: PickupHours) -> Self {
        Self { store, hours }
    }

    /// Pickup slots on offer.
    #[must_use]
    pub fn slots(&self) -> Vec<PickupSlot> {
        self.hours.slots()
    }

    /// Contact fields prefilled from the signed-in user, or blank.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Storage` if the store fails.
    pub fn contact_defaults(&self) -> Result<CustomerInfo, CheckoutError> {
        Ok(UserRepository::new(self.store)
            .current()?
            .map(|u| contact_from_user(&u))
            .unwrap_or_default())
    }

    /// Totals for the stored cart.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Storage` if the store fails.
    pub fn summary(&self) -> Result<CheckoutSummary, CheckoutError> {
        let cart = CartService::new(self.store).load()?;
        Ok(CheckoutSummary::for_cart(&cart))
    }

    /// Validate, place the order, then empty the cart.
    ///
    /// Once the order is stored the call succeeds: a cart that cannot be
    /// emptied afterwards is logged and left as it was, so the caller never
    /// sees an error for an order that was in fact placed.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Invalid` if contact or fulfilment details are rejected.
    /// Returns `CheckoutError::NotSignedIn` if nobody is signed in.
    /// Returns `CheckoutError::EmptyCart` if the cart has no lines.
    /// Returns `CheckoutError::Order` or `CheckoutError::Storage` if placing the order fails.
    #[instrument(skip_all, fields(order_type = %details.order_type))]
    pub fn submit(
        &self,
        contact: CustomerInfo,
        details: &DetailsForm,
    ) -> Result<Order, CheckoutError> {
        let contact_result = validate_contact(&contact);
        let details_result = validate_details(details, self.hours);
        let order_details = match (contact_result, details_result) {
            (Ok(()), Ok(d)) => d,
            (Err(mut a), Err(b)) => {
                for e in b.errors() {
                    a.add(e.field, e.message.clone());
                }
                return Err(a.into());
            }
            (Err(e), _) | (_, Err(e)) => return Err(e.into()),
        };

        if UserRepository::new(self.store).current()?.is_none() {
            return Err(CheckoutError::NotSignedIn);
        }

        let carts = CartService::new(self.store);
        let cart = carts.load()?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = OrderService::new(self.store).create_order(
            cart.items(),
            contact,
            order_details,
        )?;
        if let Err(e) = carts.clear() {
            tracing::error!(
                order_ref = order.short_id(),
                error = %e,
                "Order placed but the cart could not be emptied"
            );
        }

        tracing::info!(order_ref = order.short_id(), "Checkout complete");
        Ok(order)
    }
}
