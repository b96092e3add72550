//! User-related DTOs.

use roster_core::{User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier.
    #[schema(value_type = i64, example = 1)]
    pub id: UserId,
    /// Display name.
    #[schema(example = "Alice")]
    pub name: String,
    /// Contact address.
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            email: user.email().to_string(),
        }
    }
}
