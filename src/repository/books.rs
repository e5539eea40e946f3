//! Books repository

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
    repository::LibraryData,
};

#[derive(Clone)]
pub struct BooksRepository {
    data: Arc<RwLock<LibraryData>>,
}

impl BooksRepository {
    pub fn new(data: Arc<RwLock<LibraryData>>) -> Self {
        Self { data }
    }

    /// List all books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.data.read().await.books.clone()
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        self.data
            .read()
            .await
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a new book
    pub async fn create(&self, input: BookInput) -> Book {
        let book = Book {
            id: Uuid::new_v4(),
            title: input.title,
            category: input.category,
            description: input.description,
            publication_year: input.publication_year,
        };
        self.data.write().await.books.push(book.clone());
        book
    }

    /// Replace every field of a book; the ID is preserved
    pub async fn update(&self, id: Uuid, input: BookInput) -> AppResult<()> {
        let mut data = self.data.write().await;
        let book = data
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;
        book.title = input.title;
        book.category = input.category;
        book.description = input.description;
        book.publication_year = input.publication_year;
        Ok(())
    }

    /// Delete a book from the global collection
    ///
    /// Author book lists and reservations that reference the book are left
    /// untouched; their ids resolve to nothing at read time.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut data = self.data.write().await;
        let pos = data
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;
        data.books.remove(pos);
        Ok(())
    }
}
