//! Account commands.
//!
//! The backend is a mock: any password is accepted for a known email and
//! no password is stored.
//!
//! # Usage
//!
//! ```bash
//! ds-cli account sign-up --first-name Jane --last-name Doe -e jane@example.com \
//!     -p secret1 --confirm-password secret1
//! ds-cli account sign-in -e demo@example.com -p anything
//! ds-cli account update --phone "(555) 000-1111"
//! ds-cli account whoami
//! ds-cli account sign-out
//! ```

use demo_smoke_storefront::forms::{SignInForm, SignUpForm};
use demo_smoke_storefront::models::{ProfileUpdate, User};
use demo_smoke_storefront::storage::KeyValueStore;
use demo_smoke_storefront::{AppError, Storefront};

fn report(user: &User) {
    tracing::info!("{} <{}>", user.full_name(), user.email);
    if let Some(phone) = &user.phone {
        tracing::info!("Phone: {phone}");
    }
    tracing::info!("Member since {}", user.created_at.format("%B %-d, %Y"));
}

/// Create an account and sign in as it.
///
/// # Errors
///
/// Returns `AppError::Validation` if the form is rejected, or
/// `AppError::Auth` if the email is taken.
pub fn sign_up<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
    form: SignUpForm,
) -> Result<(), AppError> {
    let valid = form.validate()?;
    let user = shop
        .auth()
        .sign_up(&valid.email, &valid.password, valid.profile)?;
    tracing::info!("Welcome, {}! Your account is ready.", user.first_name);
    Ok(())
}

/// Sign in to an existing account.
///
/// # Errors
///
/// Returns `AppError::Validation` if the form is rejected, or
/// `AppError::Auth` if no account has the email.
pub fn sign_in<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
    form: SignInForm,
) -> Result<(), AppError> {
    let valid = form.validate()?;
    let user = shop.auth().sign_in(&valid.email, &valid.password)?;
    tracing::info!("Signed in as {}", user.email);
    Ok(())
}

/// Sign out.
///
/// # Errors
///
/// Returns `AppError::Auth` if the store fails.
pub fn sign_out<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
) -> Result<(), AppError> {
    shop.auth().sign_out()?;
    tracing::info!("Signed out");
    Ok(())
}

/// Show the signed-in account.
///
/// # Errors
///
/// Returns `AppError::Auth` if the store fails.
pub fn whoami<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
) -> Result<(), AppError> {
    match shop.auth().current_user()? {
        Some(user) => report(&user),
        None => tracing::info!("Not signed in"),
    }
    Ok(())
}

/// Apply profile edits to the signed-in account.
///
/// # Errors
///
/// Returns `AppError::Auth` if nobody is signed in or the store fails.
pub fn update<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
    update: &ProfileUpdate,
) -> Result<(), AppError> {
    if update.is_empty() {
        tracing::info!("Nothing to update");
        return Ok(());
    }
    let user = shop.auth().update_profile(update)?;
    tracing::info!("Profile updated");
    report(&user);
    Ok(())
}
