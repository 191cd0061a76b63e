//! Unified error handling.
//!
//! Provides a unified `AppError` type over every service error, plus the
//! message a customer sees for each. Storage failures are logged in full and
//! shown only as a generic message.

use thiserror::Error;

use demo_smoke_core::ProductId;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::forms::ValidationErrors;
use crate::services::auth::AuthError;
use crate::services::orders::OrderError;
use crate::storage::StorageError;

const GENERIC_MESSAGE: &str = "An unexpected error occurred";
const SIGN_IN_TO_ORDER: &str = "Must be signed in to place order";

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// A form was rejected.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// No product has this ID.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// No category has this slug.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// The visitor has not passed the age gate this session.
    #[error("Age not verified")]
    AgeNotVerified,
}

impl AppError {
    /// The message shown to the customer.
    ///
    /// Internal failures are logged here and replaced by a generic message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage(e) => internal(e),
            Self::Auth(e) => auth_message(e),
            Self::Order(e) => order_message(e),
            Self::Checkout(e) => match e {
                CheckoutError::Invalid(errors) => errors.to_string(),
                CheckoutError::NotSignedIn => SIGN_IN_TO_ORDER.to_string(),
                CheckoutError::EmptyCart => "Your cart is empty".to_string(),
                CheckoutError::Order(e) => order_message(e),
                CheckoutError::Storage(e) => internal(e),
            },
            Self::Validation(errors) => errors.to_string(),
            Self::Config(e) => e.to_string(),
            Self::ProductNotFound(_) => "Product not found".to_string(),
            Self::CategoryNotFound(_) => "Category not found".to_string(),
            Self::AgeNotVerified => {
                "You must be 21 or older to enter. Run `age confirm` first.".to_string()
            }
        }
    }
}

fn internal(err: &StorageError) -> String {
    tracing::error!(error = %err, "Storage failure");
    GENERIC_MESSAGE.to_string()
}

fn auth_message(err: &AuthError) -> String {
    match err {
        AuthError::InvalidEmail(_) => "Please enter a valid email address".to_string(),
        AuthError::UserAlreadyExists => "User already exists with this email".to_string(),
        AuthError::UserNotFound => "User not found".to_string(),
        AuthError::NotSignedIn => "Not signed in".to_string(),
        AuthError::Storage(e) => internal(e),
    }
}

fn order_message(err: &OrderError) -> String {
    match err {
        OrderError::NotSignedIn => SIGN_IN_TO_ORDER.to_string(),
        OrderError::OrderNotFound(_) => "Order not found".to_string(),
        OrderError::Storage(e) => internal(e),
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
