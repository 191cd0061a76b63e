//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Mock sign-up, sign-in and profile edits
//! - `orders` - Mock order placement and history
//! - `age_gate` - Per-session age confirmation
//!
//! Every service borrows a [`KeyValueStore`](crate::storage::KeyValueStore)
//! and holds no state of its own.

pub mod age_gate;
pub mod auth;
pub mod orders;

pub use age_gate::AgeGate;
pub use auth::{AuthError, AuthService};
pub use orders::{OrderError, OrderService};
