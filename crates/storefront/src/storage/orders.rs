//! Order repository over the key-value store.

use demo_smoke_core::{OrderId, OrderStatus, UserId};

use super::{KeyValueStore, StorageError, TypedStore, keys};
use crate::models::Order;

/// Repository for placed orders, stored as one list under [`keys::ORDERS`].
pub struct OrderRepository<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> OrderRepository<'a, S> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Every order, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Order>, StorageError> {
        Ok(self.store.load(keys::ORDERS)?.unwrap_or_default())
    }

    /// Orders placed by `user_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn for_user(&self, user_id: &UserId) -> Result<Vec<Order>, StorageError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|o| &o.user_id == user_id)
            .collect())
    }

    /// Append an order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    pub fn insert(&self, order: &Order) -> Result<(), StorageError> {
        let mut orders = self.list()?;
        orders.push(order.clone());
        self.store.save(keys::ORDERS, &orders)
    }

    /// Set the status of order `id`, returning the updated order.
    ///
    /// Returns `None` if no order has that ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    pub fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StorageError> {
        let mut orders = self.list()?;
        let Some(order) = orders.iter_mut().find(|o| &o.id == id) else {
            return Ok(None);
        };
        order.status = status;
        let updated = order.clone();
        self.store.save(keys::ORDERS, &orders)?;
        Ok(Some(updated))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use demo_smoke_core::{OrderType, Price};

    use super::*;
    use crate::models::CustomerInfo;
    use crate::storage::MemoryStore;

    fn order(id: &str, user: &str) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new(user),
            customer_info: CustomerInfo::default(),
            items: Vec::new(),
            total: Price::ZERO,
            order_type: OrderType::Pickup,
            pickup_time: Some("10:00".to_owned()),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_keeps_creation_order() {
        let store = MemoryStore::new();
        let repo = OrderRepository::new(&store);
        repo.insert(&order("o1", "u1")).unwrap();
        repo.insert(&order("o2", "u2")).unwrap();
        repo.insert(&order("o3", "u1")).unwrap();

        let ids: Vec<_> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|o| o.id.into_inner())
            .collect();
        assert_eq!(ids, ["o1", "o2", "o3"]);
    }

    #[test]
    fn test_for_user_filters() {
        let store = MemoryStore::new();
        let repo = OrderRepository::new(&store);
        repo.insert(&order("o1", "u1")).unwrap();
        repo.insert(&order("o2", "u2")).unwrap();
        repo.insert(&order("o3", "u1")).unwrap();

        let mine = repo.for_user(&UserId::new("u1")).unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|o| o.user_id.as_str() == "u1"));
        assert!(repo.for_user(&UserId::new("u9")).unwrap().is_empty());
    }

    #[test]
    fn test_update_status() {
        let store = MemoryStore::new();
        let repo = OrderRepository::new(&store);
        repo.insert(&order("o1", "u1")).unwrap();

        let updated = repo
            .update_status(&OrderId::new("o1"), OrderStatus::Ready)
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Ready);
        assert_eq!(repo.list().unwrap()[0].status, OrderStatus::Ready);

        assert!(
            repo.update_status(&OrderId::new("missing"), OrderStatus::Ready)
                .unwrap()
                .is_none()
        );
    }
}
