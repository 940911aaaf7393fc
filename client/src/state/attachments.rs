//! Files attached to an issue in the current view.

#[cfg(test)]
#[path = "attachments_test.rs"]
mod attachments_test;

use crate::net::types::Attachment;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttachmentList {
    pub items: Vec<Attachment>,
}

impl AttachmentList {
    /// Record a picked file. Ids follow list position.
    pub fn add(&mut self, name: String, size: u64) {
        let id = u32::try_from(self.items.len() + 1).unwrap_or(u32::MAX);
        self.items.push(Attachment { id, name, size });
    }
}

/// List label for an attachment, e.g. `notes.pdf (2048 bytes)`.
#[must_use]
pub fn attachment_label(attachment: &Attachment) -> String {
    format!("{} ({} bytes)", attachment.name, attachment.size)
}
