//! Session and identity management.
//!
//! Manages the current user, the registered-users list, and the credential
//! check. One distinguished admin account is guaranteed to exist: it is
//! created on first run with fixed credentials and metadata.
//!
//! Credential model, as the storefront has always behaved: the admin email
//! requires the exact password literal; every other registered email logs in
//! with no password check at all. The latter is a known weakness of the
//! credential model and is preserved here deliberately rather than silently
//! redesigned.

mod error;

pub use error::AuthError;

use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use tracing::{info, warn};

use vitrina_core::{Email, NewUser, User, UserId};

use crate::store::{KeySpace, SharedStore};

/// Fixed id of the bootstrapped admin account.
pub const ADMIN_USER_ID: &str = "admin-001";

/// Fixed email of the bootstrapped admin account.
pub const ADMIN_EMAIL: &str = "admin@vitrina.do";

/// Fixed password of the bootstrapped admin account. The only password the
/// storefront ever checks.
pub const ADMIN_PASSWORD: &str = "GMVP";

const ADMIN_NAME: &str = "Administrador Vitrina";
const ADMIN_PHONE: &str = "+1 (809) 555-1234";
const ADMIN_ADDRESS: &str = "Av. Winston Churchill #45, Santo Domingo, República Dominicana";

/// Partial profile update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
}

/// Manages the current user and the registered-users list.
pub struct SessionManager {
    store: SharedStore,
    keys: KeySpace,
    current: RwLock<Option<User>>,
}

impl SessionManager {
    /// Create a session manager: ensures the admin account exists, then
    /// restores any persisted session.
    ///
    /// Store read failures degrade to "no data"; this constructor never
    /// fails.
    #[must_use]
    pub fn new(store: SharedStore, keys: KeySpace) -> Self {
        let manager = Self {
            store,
            keys,
            current: RwLock::new(None),
        };
        manager.ensure_admin();
        manager.restore();
        manager
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All registered users. An unreadable list reads as empty.
    #[must_use]
    pub fn registered_users(&self) -> Vec<User> {
        self.store
            .get_json::<Vec<User>>(&self.keys.users())
            .unwrap_or_default()
    }

    /// Log in.
    ///
    /// The admin email succeeds only with the exact fixed password. Any
    /// other registered email succeeds regardless of the supplied password
    /// (see the module docs). On success the session is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the email is unknown
    /// or the admin password does not match.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email == ADMIN_EMAIL && password != ADMIN_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        let user = self
            .registered_users()
            .into_iter()
            .find(|u| u.email.as_str() == email)
            .ok_or(AuthError::InvalidCredentials)?;

        info!(user = %user.id, admin = user.is_admin, "logged in");
        self.set_current(user.clone());
        Ok(user)
    }

    /// Register a new account and log it in.
    ///
    /// Self-registered accounts are never admins.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmailTaken`] if the email is already registered
    /// (the users list is not mutated), or [`AuthError::Persist`] if the
    /// updated list cannot be written (the registration did not take effect).
    pub fn register(&self, profile: NewUser) -> Result<User, AuthError> {
        let mut users = self.registered_users();
        if users.iter().any(|u| u.email == profile.email) {
            return Err(AuthError::EmailTaken);
        }

        let now = Utc::now();
        let user = User {
            id: UserId::from_timestamp(now),
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            address: profile.address,
            avatar: profile.avatar,
            is_admin: false,
            created_at: now,
        };

        users.push(user.without_avatar());
        self.store.set_json(&self.keys.users(), &users)?;

        info!(user = %user.id, "registered");
        self.set_current(user.clone());
        Ok(user)
    }

    /// Log out: clears the current user and removes the session key.
    pub fn logout(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.store.remove(&self.keys.session());
    }

    /// Merge fields into the current user's profile.
    ///
    /// The in-memory user keeps its avatar; the persisted session snapshot
    /// and the users-list entry are stored without it so a large inline
    /// image cannot exhaust the store quota.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotLoggedIn`] when no user is active. Persist
    /// failures are logged, not returned: the in-memory profile is already
    /// updated and is not rolled back.
    pub fn update_profile(&self, update: ProfileUpdate) -> Result<User, AuthError> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let user = current.as_mut().ok_or(AuthError::NotLoggedIn)?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }
        if let Some(address) = update.address {
            user.address = address;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }

        let snapshot = user.without_avatar();
        self.persist_session(&snapshot);

        let mut users = self.registered_users();
        if let Some(entry) = users.iter_mut().find(|u| u.id == snapshot.id) {
            *entry = snapshot;
        }
        if let Err(error) = self.store.set_json(&self.keys.users(), &users) {
            warn!(%error, "could not persist profile update to the users list");
        }

        Ok(user.clone())
    }

    fn set_current(&self, user: User) {
        self.persist_session(&user.without_avatar());
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    fn persist_session(&self, user: &User) {
        if let Err(error) = self.store.set_json(&self.keys.session(), user) {
            warn!(%error, "could not persist session");
        }
    }

    /// Create the distinguished admin record if it is missing.
    fn ensure_admin(&self) {
        let mut users = self.registered_users();
        if users.iter().any(|u| u.email.as_str() == ADMIN_EMAIL) {
            return;
        }

        let Ok(email) = Email::parse(ADMIN_EMAIL) else {
            return;
        };
        users.push(User {
            id: UserId::new(ADMIN_USER_ID),
            name: ADMIN_NAME.to_owned(),
            email,
            phone: ADMIN_PHONE.to_owned(),
            address: ADMIN_ADDRESS.to_owned(),
            avatar: None,
            is_admin: true,
            created_at: Utc::now(),
        });

        match self.store.set_json(&self.keys.users(), &users) {
            Ok(()) => info!("bootstrapped admin account"),
            Err(error) => warn!(%error, "could not bootstrap admin account"),
        }
    }

    /// Restore a persisted session, if one exists and is readable.
    fn restore(&self) {
        if let Some(user) = self.store.get_json::<User>(&self.keys.session()) {
            *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
        }
    }
}
