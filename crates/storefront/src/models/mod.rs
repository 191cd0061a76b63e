//! Domain models for the storefront.
//!
//! These are the records persisted by the mock backend. Field names serialize
//! in camelCase so stored documents keep the shape the shop has always used.

pub mod order;
pub mod user;

pub use order::{CustomerInfo, Order, OrderDetails, OrderItem};
pub use user::{ProfileUpdate, SignUpProfile, User};
