//! User service trait definition.

use roster_core::User;
use shaku::Interface;

/// Read-only access to the user records.
pub trait UserService: Interface {
    /// Lists all users in their fixed order.
    ///
    /// Never fails and has no side effects; every call yields the same records.
    fn list_users(&self) -> &[User];
}
