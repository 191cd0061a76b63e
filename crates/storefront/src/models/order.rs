//! Order domain types.
//!
//! An order owns snapshots of everything it refers to. Later catalog edits or
//! profile changes never alter a placed order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use demo_smoke_core::{OrderId, OrderStatus, OrderType, Price, ProductId, UserId};

use crate::cart::CartLine;

/// Number of leading id characters shown to customers as the order reference.
const SHORT_ID_LENGTH: usize = 8;

/// Contact details captured at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Fulfilment choices made at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDetails {
    pub order_type: OrderType,
    /// Slot value such as `"14:00"`; only meaningful for pickup.
    pub pickup_time: Option<String>,
}

/// One purchased product, frozen at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub product_image: String,
    pub quantity: u32,
    /// Unit price when the order was placed.
    pub price: Price,
}

impl OrderItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id.clone(),
            product_name: line.product.name.clone(),
            product_image: line.product.image.clone(),
            quantity: line.quantity,
            price: line.product.price,
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Account that placed the order.
    pub user_id: UserId,
    pub customer_info: CustomerInfo,
    pub items: Vec<OrderItem>,
    pub total: Price,
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// The customer-facing order reference (leading id characters).
    #[must_use]
    pub fn short_id(&self) -> &str {
        let id = self.id.as_str();
        id.char_indices()
            .nth(SHORT_ID_LENGTH)
            .and_then(|(end, _)| id.get(..end))
            .unwrap_or(id)
    }

    /// Total number of units across all items.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
