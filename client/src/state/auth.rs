//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The session comes from
//! `localStorage`; sign-in is checked against built-in demo accounts.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, StoredUser};
use crate::util::storage;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<StoredUser>,
    pub loading: bool,
}

impl AuthState {
    /// State before storage has been read; guards show a placeholder.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// State restored from `localStorage`.
    #[must_use]
    pub fn restore() -> Self {
        Self { user: storage::load_session(), loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(StoredUser::role)
    }
}

/// A built-in sign-in account.
struct DemoAccount {
    email: &'static str,
    password: &'static str,
    token: &'static str,
    id: &'static str,
    name: &'static str,
    role: Role,
    department: &'static str,
}

const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        email: "student@example.com",
        password: "password",
        token: "demo-student-token",
        id: "1",
        name: "John Student",
        role: Role::Student,
        department: "Computer Science",
    },
    DemoAccount {
        email: "lecturer@example.com",
        password: "password",
        token: "demo-lecturer-token",
        id: "2",
        name: "Jane Lecturer",
        role: Role::Lecturer,
        department: "Computer Science",
    },
    DemoAccount {
        email: "admin@example.com",
        password: "password",
        token: "demo-admin-token",
        id: "3",
        name: "Admin User",
        role: Role::Admin,
        department: "IT Services",
    },
];

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const ROLE_MISMATCH: &str = "You are not authorized to access this role. Please select the correct role.";

/// A successful sign-in: the access token and the user to store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: StoredUser,
}

/// Check credentials against the demo accounts.
///
/// When `selected_role` is present, the account's role must match it.
///
/// # Errors
///
/// Returns [`INVALID_CREDENTIALS`] for unknown email/password pairs and
/// [`ROLE_MISMATCH`] when the account belongs to another role.
pub fn authenticate(email: &str, password: &str, selected_role: Option<&str>) -> Result<Session, &'static str> {
    let email = email.trim().to_lowercase();
    let account = DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email == email && a.password == password)
        .ok_or(INVALID_CREDENTIALS)?;

    if let Some(selected) = selected_role.filter(|r| !r.is_empty()) {
        if selected != account.role.as_str() {
            return Err(ROLE_MISMATCH);
        }
    }

    Ok(Session {
        token: account.token.to_owned(),
        user: StoredUser {
            id: account.id.to_owned(),
            name: account.name.to_owned(),
            email: account.email.to_owned(),
            role: account.role.as_str().to_owned(),
            department: account.department.to_owned(),
        },
    })
}
