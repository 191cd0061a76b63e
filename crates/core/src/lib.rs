//! Demo Smoke Core - Shared types library.
//!
//! This crate provides the value types shared by every Demo Smoke component:
//! - `storefront` - Catalog, cart, mock auth and mock orders
//! - `cli` - Command-line front end over the storefront library
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access.
//! Anything that touches the key-value store lives in the storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
