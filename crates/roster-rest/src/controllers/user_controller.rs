//! User controller.

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use roster_service::UserResponse;
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

/// List all users.
///
/// Query strings, headers and bodies are ignored.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users, ordered by id", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    debug!("List users request");

    let users = state
        .user_service
        .list_users()
        .iter()
        .map(UserResponse::from)
        .collect();

    Json(users)
}
