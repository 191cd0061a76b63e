//! Mock order service.
//!
//! Orders are appended to the stored orders list. Nothing is charged and no
//! stock is reserved.

mod error;

pub use error::OrderError;

use chrono::Utc;
use tracing::instrument;

use demo_smoke_core::{OrderId, OrderStatus, UserId};

use crate::cart::CartLine;
use crate::models::{CustomerInfo, Order, OrderDetails, OrderItem};
use crate::storage::{KeyValueStore, OrderRepository, UserRepository};

/// Places orders for the signed-in user and reads order history.
pub struct OrderService<'a, S: KeyValueStore + ?Sized> {
    users: UserRepository<'a, S>,
    orders: OrderRepository<'a, S>,
}

impl<'a, S: KeyValueStore + ?Sized> OrderService<'a, S> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            users: UserRepository::new(store),
            orders: OrderRepository::new(store),
        }
    }

    /// Place an order for the signed-in user.
    ///
    /// Each line is snapshotted, so later catalog changes do not touch the
    /// order. The total is computed from the snapshots. An empty `lines`
    /// slice is accepted and yields a zero-total order.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotSignedIn` if nobody is signed in.
    /// Returns `OrderError::Storage` if the store fails.
    #[instrument(skip_all, fields(lines = lines.len(), order_type = %details.order_type))]
    pub fn create_order(
        &self,
        lines: &[CartLine],
        customer: CustomerInfo,
        details: OrderDetails,
    ) -> Result<Order, OrderError> {
        let user = self.users.current()?.ok_or(OrderError::NotSignedIn)?;

        let items: Vec<OrderItem> = lines.iter().map(OrderItem::from).collect();
        let total = items.iter().map(OrderItem::line_total).sum();

        let order = Order {
            id: OrderId::generate(),
            user_id: user.id,
            customer_info: customer,
            items,
            total,
            order_type: details.order_type,
            pickup_time: details.pickup_time,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        self.orders.insert(&order)?;

        tracing::info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total = %order.total,
            "Order created"
        );
        Ok(order)
    }

    /// Orders placed by `user_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Storage` if the store fails.
    pub fn user_orders(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.for_user(user_id)?)
    }

    /// Move order `id` to `status`.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::OrderNotFound` if no order has that ID.
    /// Returns `OrderError::Storage` if the store fails.
    #[instrument(skip(self), fields(order_id = %id))]
    pub fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self
            .orders
            .update_status(id, status)?
            .ok_or_else(|| OrderError::OrderNotFound(id.clone()))?;

        tracing::info!(status = %order.status, "Order status updated");
        Ok(order)
    }
}
