//! Author management endpoints

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
        author::{Author, AuthorDetails, AuthorInput},
        book::BookInput,
    },
    AppState,
};

/// List all authors with their books
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of authors", body = Vec<AuthorDetails>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> Json<Vec<AuthorDetails>> {
    Json(state.store.authors.list().await)
}

/// Get author details by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = AuthorDetails),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AuthorDetails>> {
    let author = state.store.authors.get_details(id).await?;
    Ok(Json(author))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    request_body = AuthorInput,
    responses(
        (status = 201, description = "Author created", body = Author)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(input): Json<AuthorInput>,
) -> impl IntoResponse {
    let created = state.store.authors.create(input).await;
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/authors/{}", created.id))],
        Json(created),
    )
}

/// Update an existing author (replaces every field)
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    request_body = AuthorInput,
    responses(
        (status = 204, description = "Author updated"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AuthorInput>,
) -> AppResult<StatusCode> {
    state.store.authors.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.store.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a book and add it to the author's book list
#[utoipa::path(
    post,
    path = "/authors/{id}/books",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    request_body = BookInput,
    responses(
        (status = 204, description = "Book added to the author"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<BookInput>,
) -> AppResult<StatusCode> {
    state.store.authors.add_book(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}
