//! Authors repository

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorDetails, AuthorInput},
        book::{Book, BookInput},
    },
    repository::LibraryData,
};

#[derive(Clone)]
pub struct AuthorsRepository {
    data: Arc<RwLock<LibraryData>>,
}

impl AuthorsRepository {
    pub fn new(data: Arc<RwLock<LibraryData>>) -> Self {
        Self { data }
    }

    /// List all authors with their book lists resolved
    pub async fn list(&self) -> Vec<AuthorDetails> {
        let data = self.data.read().await;
        data.authors
            .iter()
            .map(|a| resolve_books(a, &data.books))
            .collect()
    }

    /// Get an author by ID with its book list resolved
    pub async fn get_details(&self, id: Uuid) -> AppResult<AuthorDetails> {
        let data = self.data.read().await;
        data.authors
            .iter()
            .find(|a| a.id == id)
            .map(|a| resolve_books(a, &data.books))
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }

    /// Get the stored author record by ID (book list as raw ids)
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Author> {
        self.data
            .read()
            .await
            .authors
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }

    /// Create a new author with an empty book list
    pub async fn create(&self, input: AuthorInput) -> Author {
        let author = Author {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            nationality: input.nationality,
            age: input.age,
            books: Vec::new(),
        };
        self.data.write().await.authors.push(author.clone());
        author
    }

    /// Replace every scalar field of an author; ID and book list are preserved
    pub async fn update(&self, id: Uuid, input: AuthorInput) -> AppResult<()> {
        let mut data = self.data.write().await;
        let author = data
            .authors
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))?;
        author.first_name = input.first_name;
        author.last_name = input.last_name;
        author.nationality = input.nationality;
        author.age = input.age;
        Ok(())
    }

    /// Delete an author; books attributed to it stay in the global collection
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut data = self.data.write().await;
        let pos = data
            .authors
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))?;
        data.authors.remove(pos);
        Ok(())
    }

    /// Create a book and attribute it to an author
    ///
    /// The book is inserted into the global collection and its id is
    /// appended to the author's list in one step, so both sides refer to
    /// the same record.
    pub async fn add_book(&self, author_id: Uuid, input: BookInput) -> AppResult<Book> {
        let mut data = self.data.write().await;
        let pos = data
            .authors
            .iter()
            .position(|a| a.id == author_id)
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", author_id)))?;

        let book = Book {
            id: Uuid::new_v4(),
            title: input.title,
            category: input.category,
            description: input.description,
            publication_year: input.publication_year,
        };
        data.books.push(book.clone());
        data.authors[pos].books.push(book.id);
        Ok(book)
    }
}

/// Resolve an author's book ids against the global collection
///
/// Ids left dangling by a deleted book are omitted from the view.
fn resolve_books(author: &Author, books: &[Book]) -> AuthorDetails {
    let books = author
        .books
        .iter()
        .filter_map(|id| books.iter().find(|b| b.id == *id).cloned())
        .collect();
    AuthorDetails {
        id: author.id,
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
        nationality: author.nationality.clone(),
        age: author.age,
        books,
    }
}
