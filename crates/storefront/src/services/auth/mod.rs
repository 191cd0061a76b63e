//! Mock authentication service.
//!
//! Accounts are records in the key-value store. Passwords are accepted but
//! never stored or checked: any password signs in to an existing account.
//! This is demo scaffolding, not authentication.

mod error;

pub use error::AuthError;

use chrono::Utc;
use secrecy::SecretString;
use tracing::instrument;

use demo_smoke_core::{Email, UserId};

use crate::models::{ProfileUpdate, SignUpProfile, User};
use crate::storage::{KeyValueStore, UserRepository};

/// ID of the built-in demo account.
pub const DEMO_USER_ID: &str = "demo-user-1";

/// Email of the built-in demo account.
pub const DEMO_USER_EMAIL: &str = "demo@example.com";

/// Authentication service.
///
/// Handles sign-up, sign-in, sign-out and profile edits against the stored
/// users list and current-user record.
pub struct AuthService<'a, S: KeyValueStore + ?Sized> {
    users: UserRepository<'a, S>,
}

impl<'a, S: KeyValueStore + ?Sized> AuthService<'a, S> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            users: UserRepository::new(store),
        }
    }

    /// Register a new account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    /// Returns `AuthError::Storage` if the store fails.
    #[instrument(skip(self, _password, profile), fields(email = %email))]
    pub fn sign_up(
        &self,
        email: &Email,
        _password: &SecretString,
        profile: SignUpProfile,
    ) -> Result<User, AuthError> {
        if self.users.find_by_email(email)?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let user = User {
            id: UserId::generate(),
            email: email.clone(),
            first_name: profile.first_name,
            last_name: profile.last_name,
            phone: profile.phone.filter(|p| !p.trim().is_empty()),
            created_at: Utc::now(),
        };

        self.users.insert(&user)?;
        self.users.set_current(&user)?;

        tracing::info!(user_id = %user.id, "User signed up");
        Ok(user)
    }

    /// Sign in to an existing account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no account has this email.
    /// Returns `AuthError::Storage` if the store fails.
    #[instrument(skip(self, _password), fields(email = %email))]
    pub fn sign_in(&self, email: &Email, _password: &SecretString) -> Result<User, AuthError> {
        let user = self
            .users
            .find_by_email(email)?
            .ok_or(AuthError::UserNotFound)?;

        self.users.set_current(&user)?;

        tracing::info!(user_id = %user.id, "User signed in");
        Ok(user)
    }

    /// Sign out. Succeeds whether or not anyone is signed in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the store fails.
    #[instrument(skip(self))]
    pub fn sign_out(&self) -> Result<(), AuthError> {
        self.users.clear_current()?;
        tracing::info!("User signed out");
        Ok(())
    }

    /// The signed-in account, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the store fails.
    pub fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.users.current()?)
    }

    /// Merge `update` into the signed-in account.
    ///
    /// Both the users list and the current-user record are rewritten.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotSignedIn` if nobody is signed in.
    /// Returns `AuthError::UserNotFound` if the signed-in account is no longer stored.
    /// Returns `AuthError::Storage` if the store fails.
    #[instrument(skip(self, update))]
    pub fn update_profile(&self, update: &ProfileUpdate) -> Result<User, AuthError> {
        let current = self.users.current()?.ok_or(AuthError::NotSignedIn)?;
        let stored = self
            .users
            .find_by_id(&current.id)?
            .ok_or(AuthError::UserNotFound)?;

        let updated = update.apply(&stored);
        self.users.replace(&updated)?;
        self.users.set_current(&updated)?;

        tracing::info!(user_id = %updated.id, "Profile updated");
        Ok(updated)
    }

    /// Install the demo account when no accounts exist yet.
    ///
    /// Returns `true` if the account was created.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the store fails.
    pub fn seed_demo_user(&self) -> Result<bool, AuthError> {
        if !self.users.list()?.is_empty() {
            return Ok(false);
        }

        let demo = User {
            id: UserId::new(DEMO_USER_ID),
            email: Email::parse(DEMO_USER_EMAIL)?,
            first_name: "Demo".to_owned(),
            last_name: "User".to_owned(),
            phone: Some("(555) 123-4567".to_owned()),
            created_at: Utc::now(),
        };
        self.users.insert(&demo)?;

        tracing::debug!("Seeded demo account");
        Ok(true)
    }
}
