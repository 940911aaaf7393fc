//! Comment thread for a single issue view.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::net::types::Comment;

/// Author name recorded for comments written in this browser.
pub const SELF_AUTHOR: &str = "You";

/// Append-only list of comments. No ordering beyond append order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentThread {
    pub comments: Vec<Comment>,
}

impl CommentThread {
    /// Thread pre-filled with the placeholder discussion.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            comments: vec![
                Comment { id: 1, content: "This is a comment.".to_owned(), user: "John".to_owned() },
                Comment { id: 2, content: "Another comment.".to_owned(), user: "Jane".to_owned() },
            ],
        }
    }

    /// Append `text` as a comment by [`SELF_AUTHOR`].
    ///
    /// Whitespace-only text is ignored. Returns whether a comment was added.
    pub fn submit(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let id = u32::try_from(self.comments.len() + 1).unwrap_or(u32::MAX);
        self.comments.push(Comment { id, content: text.to_owned(), user: SELF_AUTHOR.to_owned() });
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
