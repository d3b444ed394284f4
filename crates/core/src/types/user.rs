//! User records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;

/// A registered storefront user.
///
/// Exactly one distinguished admin record exists (bootstrapped on first run);
/// self-registered accounts are never admins. Field names serialize camelCase
/// to match the stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique among registered users (case-sensitive).
    pub email: Email,
    /// Contact phone number.
    pub phone: String,
    /// Delivery address.
    pub address: String,
    /// Avatar image as inline data. Large: excluded from persisted snapshots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Whether this is the distinguished admin account.
    pub is_admin: bool,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Copy of this user with the avatar payload stripped.
    ///
    /// Persisted snapshots (session key and users list) always go through
    /// this to keep large inline images out of the quota-bounded store.
    #[must_use]
    pub fn without_avatar(&self) -> Self {
        Self {
            avatar: None,
            ..self.clone()
        }
    }
}

/// Profile supplied at registration. ID, timestamp, and the admin flag are
/// assigned by the session manager.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub avatar: Option<String>,
}
