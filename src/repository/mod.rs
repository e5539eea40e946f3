//! In-memory repository for the library collections

pub mod authors;
pub mod books;
pub mod users;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Author, Book, Reservation, User};

/// Backing storage for all collections
///
/// All access goes through a single lock so concurrent handlers never see
/// a half-applied mutation and identifiers are never duplicated.
#[derive(Debug, Default)]
pub struct LibraryData {
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
    pub users: Vec<User>,
    /// Reservations live on their owning user. Unlike books, the attach
    /// path does not insert into this collection; it is kept to mirror the
    /// shape of the other collections.
    pub reservations: Vec<Reservation>,
}

/// Main repository struct holding the shared in-memory store
#[derive(Clone)]
pub struct Repository {
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with empty collections
    pub fn new() -> Self {
        let data = Arc::new(RwLock::new(LibraryData::default()));
        Self {
            authors: authors::AuthorsRepository::new(data.clone()),
            books: books::BooksRepository::new(data.clone()),
            users: users::UsersRepository::new(data),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
