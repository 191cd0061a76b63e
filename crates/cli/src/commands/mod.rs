//! CLI command implementations.
//!
//! Each function runs one subcommand against an open [`Storefront`] and
//! reports through `tracing`.
//!
//! [`Storefront`]: demo_smoke_storefront::Storefront

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod session;
