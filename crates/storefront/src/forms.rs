//! Form validation.
//!
//! Each form validates every field and reports all failures at once, keyed
//! by the field name the form uses. A form that passes is converted into the
//! typed values the services take.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use demo_smoke_core::Email;

use crate::models::SignUpProfile;

/// Shortest accepted first or last name, in characters.
pub const MIN_NAME_LENGTH: usize = 2;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

const INVALID_EMAIL: &str = "Please enter a valid email address";
const SHORT_PASSWORD: &str = "Password must be at least 6 characters";

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name, e.g. `firstName`.
    pub field: &'static str,
    /// Message shown next to the field.
    pub message: String,
}

/// Every field a form rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// No errors yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rejected fields in form order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The message for `field`, if it was rejected.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(value)` if nothing was rejected, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field was rejected.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn check_min_chars(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: usize,
    message: &str,
) {
    if value.chars().count() < min {
        errors.add(field, message);
    }
}

fn check_email(errors: &mut ValidationErrors, field: &'static str, value: &str) -> Option<Email> {
    match Email::parse(value) {
        Ok(email) => Some(email),
        Err(_) => {
            errors.add(field, INVALID_EMAIL);
            None
        }
    }
}

/// Blank optional text becomes `None`.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Account creation form.
#[derive(Debug)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// A sign-up form that passed validation.
#[derive(Debug)]
pub struct ValidSignUp {
    pub email: Email,
    pub password: SecretString,
    pub profile: SignUpProfile,
}

impl SignUpForm {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` listing each rejected field.
    pub fn validate(self) -> Result<ValidSignUp, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_min_chars(
            &mut errors,
            "firstName",
            &self.first_name,
            MIN_NAME_LENGTH,
            "First name must be at least 2 characters",
        );
        check_min_chars(
            &mut errors,
            "lastName",
            &self.last_name,
            MIN_NAME_LENGTH,
            "Last name must be at least 2 characters",
        );
        let email = check_email(&mut errors, "email", &self.email);
        check_min_chars(
            &mut errors,
            "password",
            self.password.expose_secret(),
            MIN_PASSWORD_LENGTH,
            SHORT_PASSWORD,
        );
        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            errors.add("confirmPassword", "Passwords don't match");
        }

        let Some(email) = email else {
            return Err(errors);
        };
        errors.into_result(ValidSignUp {
            email,
            password: self.password,
            profile: SignUpProfile {
                first_name: self.first_name,
                last_name: self.last_name,
                phone: non_blank(self.phone.as_deref()),
            },
        })
    }
}

/// Sign-in form.
#[derive(Debug)]
pub struct SignInForm {
    pub email: String,
    pub password: SecretString,
}

/// A sign-in form that passed validation.
#[derive(Debug)]
pub struct ValidSignIn {
    pub email: Email,
    pub password: SecretString,
}

impl SignInForm {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` listing each rejected field.
    pub fn validate(self) -> Result<ValidSignIn, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = check_email(&mut errors, "email", &self.email);
        check_min_chars(
            &mut errors,
            "password",
            self.password.expose_secret(),
            MIN_PASSWORD_LENGTH,
            SHORT_PASSWORD,
        );

        let Some(email) = email else {
            return Err(errors);
        };
        errors.into_result(ValidSignIn {
            email,
            password: self.password,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    fn sign_up() -> SignUpForm {
        SignUpForm {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: Some("  ".to_owned()),
            password: secret("engine1"),
            confirm_password: secret("engine1"),
        }
    }

    #[test]
    fn test_valid_sign_up() {
        let valid = sign_up().validate().unwrap();
        assert_eq!(valid.email.as_str(), "ada@example.com");
        assert_eq!(valid.profile.first_name, "Ada");
        assert_eq!(valid.profile.phone, None);
    }

    #[test]
    fn test_sign_up_reports_every_field() {
        let form = SignUpForm {
            first_name: "A".to_owned(),
            last_name: String::new(),
            email: "nope".to_owned(),
            phone: None,
            password: secret("abc"),
            confirm_password: secret("abd"),
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["firstName", "lastName", "email", "password", "confirmPassword"]
        );
        assert_eq!(
            errors.message_for("firstName"),
            Some("First name must be at least 2 characters")
        );
        assert_eq!(
            errors.message_for("confirmPassword"),
            Some("Passwords don't match")
        );
    }

    #[test]
    fn test_sign_up_mismatch_only() {
        let mut form = sign_up();
        form.confirm_password = secret("engine2");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.to_string(), "confirmPassword: Passwords don't match");
    }

    #[test]
    fn test_names_count_characters_not_bytes() {
        let mut form = sign_up();
        form.first_name = "É".to_owned();
        assert!(form.validate().is_err());

        let mut form = sign_up();
        form.first_name = "Éa".to_owned();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_sign_in() {
        let ok = SignInForm {
            email: "demo@example.com".to_owned(),
            password: secret("123456"),
        };
        assert!(ok.validate().is_ok());

        let bad = SignInForm {
            email: "demo@".to_owned(),
            password: secret("12345"),
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.message_for("email"), Some(INVALID_EMAIL));
        assert_eq!(errors.message_for("password"), Some(SHORT_PASSWORD));
    }
}
