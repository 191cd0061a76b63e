//! Core types for Demo Smoke.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use category::{ParseCategoryError, ProductCategory};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use status::*;
