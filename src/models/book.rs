//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Book record; no back-reference to its author
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub description: String,
    pub publication_year: i32,
}

/// Request body for creating or replacing a book (full overwrite on PUT)
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookInput {
    pub title: String,
    pub category: String,
    pub description: String,
    pub publication_year: i32,
}
