//! Author model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::book::Book;

/// Author record as held in the store
///
/// The book list holds identifiers into the global book collection, not
/// embedded copies, so an edit made through the book collection is always
/// visible through the author as well.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub age: i32,
    /// Ids of books attributed to this author, in attach order
    pub books: Vec<Uuid>,
}

/// Author with its book list resolved to full records
///
/// A book that was deleted from the global collection leaves its id behind
/// in the author record; such ids are simply absent from this view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDetails {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub age: i32,
    pub books: Vec<Book>,
}

/// Request body for creating or replacing an author
///
/// PUT uses the same shape: every field is overwritten, there is no
/// partial-update semantics.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthorInput {
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub age: i32,
}
