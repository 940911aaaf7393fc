//! Networking and data-access modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the one real HTTP call (departments), `tickets` is the mock
//! ticket service, and `types` defines the shared DTOs.

pub mod api;
pub mod tickets;
pub mod types;
