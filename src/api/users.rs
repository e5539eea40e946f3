//! User management endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        reservation::CreateReservation,
        user::{User, UserDetails, UserInput},
    },
    AppState,
};

/// List all users with their reservations
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of users", body = Vec<UserDetails>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserDetails>> {
    Json(state.store.users.list().await)
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserDetails),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserDetails>> {
    let user = state.store.users.get_details(id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = User)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> impl IntoResponse {
    let created = state.store.users.create(input).await;
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/users/{}", created.id))],
        Json(created),
    )
}

/// Update an existing user (replaces every field)
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UserInput,
    responses(
        (status = 204, description = "User updated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UserInput>,
) -> AppResult<StatusCode> {
    state.store.users.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.store.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reserve a book for a user
///
/// An unknown book id is accepted; the reservation is recorded without a
/// book. Only an unknown user yields 404.
#[utoipa::path(
    post,
    path = "/users/{id}/reservations",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = CreateReservation,
    responses(
        (status = 204, description = "Reservation added to the user"),
        (status = 404, description = "User not found")
    )
)]
pub async fn add_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateReservation>,
) -> AppResult<StatusCode> {
    state.store.users.add_reservation(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}
