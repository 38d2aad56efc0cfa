#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::UserRecord;

/// Authentication phase for the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// State for the admin dashboard: login phase, inline error, and the
/// submissions list.
///
/// The list is append-only once hydrated: every pushed record lands at the
/// tail, and no de-duplication or reordering is attempted against the
/// fetched snapshot.
#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub phase: Phase,
    pub error: String,
    pub users: Vec<UserRecord>,
}

impl AdminState {
    /// Enter the authenticated phase after a successful token grant.
    pub fn login_succeeded(&mut self) {
        self.phase = Phase::Authenticated;
        self.error.clear();
    }

    /// Record a rejected login. The phase stays unauthenticated.
    pub fn login_failed(&mut self) {
        self.phase = Phase::Unauthenticated;
        self.error = "Invalid username or password".to_owned();
    }

    /// Replace the list with the fetched snapshot.
    pub fn hydrate_users(&mut self, users: Vec<UserRecord>) {
        self.users = users;
    }

    /// Append one pushed record to the tail of the list.
    pub fn push_user(&mut self, user: UserRecord) {
        self.users.push(user);
    }

    /// Drop back to the unauthenticated phase and clear the list.
    pub fn logout(&mut self) {
        self.phase = Phase::Unauthenticated;
        self.error.clear();
        self.users.clear();
    }
}
