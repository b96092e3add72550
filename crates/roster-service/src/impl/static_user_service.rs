//! In-memory user service backed by a fixed record set.

use crate::user_service::UserService;
use roster_core::User;
use shaku::Component;
use tracing::debug;

/// Builds the fixed user set, ordered by id.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(2, "Bob", "bob@example.com"),
        User::new(3, "Charlie", "charlie@example.com"),
    ]
}

/// User service serving the seed records.
///
/// The records are built once when the component is constructed and never
/// change afterwards.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct StaticUserService {
    #[shaku(default = seed_users())]
    users: Vec<User>,
}

impl StaticUserService {
    /// Creates a service holding the seed records.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: seed_users(),
        }
    }
}

impl Default for StaticUserService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StaticUserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticUserService")
            .field("users", &self.users.len())
            .finish()
    }
}

impl UserService for StaticUserService {
    fn list_users(&self) -> &[User] {
        debug!(count = self.users.len(), "Listing users");
        &self.users
    }
}
