//! Inbox messages for the messaging view.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::types::Message;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagesState {
    pub items: Vec<Message>,
    /// Search box text, matched case-insensitively against sender and content.
    pub search: String,
}

impl MessagesState {
    /// Inbox pre-filled with placeholder messages.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            items: vec![
                Message {
                    id: 1,
                    sender: "Dr. John Doe".to_owned(),
                    content: "Your issue has been reviewed and assigned to the IT department.".to_owned(),
                    timestamp: "2024-03-20 10:30 AM".to_owned(),
                    read: true,
                },
                Message {
                    id: 2,
                    sender: "System".to_owned(),
                    content: "Your issue status has been updated to \"In Progress\"".to_owned(),
                    timestamp: "2024-03-19 02:15 PM".to_owned(),
                    read: false,
                },
            ],
            search: String::new(),
        }
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    /// Messages matching the search box. A blank search shows everything.
    #[must_use]
    pub fn visible(&self) -> Vec<Message> {
        let needle = self.search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|m| {
                needle.is_empty()
                    || m.sender.to_lowercase().contains(&needle)
                    || m.content.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|m| !m.read).count()
    }

    /// Mark message `id` as read. Unknown ids are ignored.
    pub fn mark_read(&mut self, id: u32) {
        if let Some(message) = self.items.iter_mut().find(|m| m.id == id) {
            message.read = true;
        }
    }
}
