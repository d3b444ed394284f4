//! Per-user notification lists (peripheral surface).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use vitrina_core::{NotificationId, UserId};

use crate::store::{KeySpace, SharedStore};

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Order,
    Promotion,
    System,
}

/// One notification shown to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: chrono::DateTime<Utc>,
}

/// Reads and writes each user's notification list.
#[derive(Clone)]
pub struct Notifications {
    store: SharedStore,
    keys: KeySpace,
}

impl Notifications {
    pub const fn new(store: SharedStore, keys: KeySpace) -> Self {
        Self { store, keys }
    }

    /// A user's notifications, newest last. Unreadable lists read as empty.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<Notification> {
        self.store
            .get_json(&self.keys.notifications(user))
            .unwrap_or_default()
    }

    /// Unread notifications for the badge counter.
    #[must_use]
    pub fn unread_count(&self, user: &UserId) -> usize {
        self.list(user).iter().filter(|n| !n.read).count()
    }

    /// Append a notification and return it.
    pub fn push(
        &self,
        user: &UserId,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Notification {
        let now = Utc::now();
        let notification = Notification {
            id: NotificationId::from_timestamp(now),
            title: title.into(),
            message: message.into(),
            kind,
            read: false,
            created_at: now,
        };

        let mut list = self.list(user);
        list.push(notification.clone());
        self.save(user, &list);
        notification
    }

    /// Mark one notification read. Unknown ids are a no-op.
    pub fn mark_read(&self, user: &UserId, id: &NotificationId) {
        let mut list = self.list(user);
        let mut changed = false;
        for notification in &mut list {
            if &notification.id == id && !notification.read {
                notification.read = true;
                changed = true;
            }
        }
        if changed {
            self.save(user, &list);
        }
    }

    /// Mark every notification read.
    pub fn mark_all_read(&self, user: &UserId) {
        let mut list = self.list(user);
        if list.iter().all(|n| n.read) {
            return;
        }
        for notification in &mut list {
            notification.read = true;
        }
        self.save(user, &list);
    }

    fn save(&self, user: &UserId, list: &[Notification]) {
        if let Err(error) = self.store.set_json(&self.keys.notifications(user), &list) {
            warn!(user = %user, %error, "could not persist notifications");
        }
    }
}
