//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use demo_smoke_core::{Email, UserId};

/// A storefront account.
///
/// Stored in the users list and mirrored into the current-user record while
/// signed in. No password is kept: the mock backend accepts any password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Email address, unique across users.
    pub email: Email,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Profile fields collected at sign-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpProfile {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

/// A partial profile edit. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

impl ProfileUpdate {
    /// Whether the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.phone.is_none()
    }

    /// Apply the update to `user`, returning the merged record.
    #[must_use]
    pub fn apply(&self, user: &User) -> User {
        User {
            first_name: self
                .first_name
                .clone()
                .unwrap_or_else(|| user.first_name.clone()),
            last_name: self
                .last_name
                .clone()
                .unwrap_or_else(|| user.last_name.clone()),
            phone: self.phone.clone().or_else(|| user.phone.clone()),
            ..user.clone()
        }
    }
}
