//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod departments;
pub mod issue_detail;
pub mod issue_list;
pub mod login;
pub mod messages;
pub mod not_found;
pub mod notifications;
pub mod role_selection;
