//! View-state modules held in `RwSignal`s by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the only state shared through context. Everything else is
//! local to the page that creates it: issue lists, comment threads,
//! attachments, inbox, notifications, and dashboard figures.

pub mod attachments;
pub mod auth;
pub mod comments;
pub mod dashboard;
pub mod issues;
pub mod messages;
pub mod notifications;
