//! Demo Smoke storefront library.
//!
//! Everything the shop does without a user interface: the catalog, the cart,
//! the mock account and order backend, checkout and form validation. State is
//! kept in a pluggable key-value store so front ends and tests can choose
//! where it lives.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

pub use error::AppError;
pub use state::Storefront;
