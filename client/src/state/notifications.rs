//! Notifications list with per-item and bulk read tracking.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::{Notification, NotificationKind};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    /// List pre-filled with placeholder notifications.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            items: vec![
                Notification {
                    id: 1,
                    title: "Issue Update".to_owned(),
                    message: "Your issue #ISS-2024-001 has been resolved".to_owned(),
                    kind: NotificationKind::Success,
                    timestamp: "2024-03-20 11:30 AM".to_owned(),
                    read: false,
                },
                Notification {
                    id: 2,
                    title: "New Comment".to_owned(),
                    message: "IT Support has commented on your issue".to_owned(),
                    kind: NotificationKind::Info,
                    timestamp: "2024-03-19 03:45 PM".to_owned(),
                    read: true,
                },
            ],
        }
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Mark notification `id` as read. Unknown ids are ignored.
    pub fn mark_read(&mut self, id: u32) {
        if let Some(notification) = self.items.iter_mut().find(|n| n.id == id) {
            notification.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.read = true;
        }
    }
}
