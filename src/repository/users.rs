//! Users repository

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        reservation::{CreateReservation, Reservation, ReservationDetails},
        user::{User, UserDetails, UserInput},
    },
    repository::LibraryData,
};

#[derive(Clone)]
pub struct UsersRepository {
    data: Arc<RwLock<LibraryData>>,
}

impl UsersRepository {
    pub fn new(data: Arc<RwLock<LibraryData>>) -> Self {
        Self { data }
    }

    /// List all users with the book of each reservation resolved
    pub async fn list(&self) -> Vec<UserDetails> {
        let data = self.data.read().await;
        data.users
            .iter()
            .map(|u| resolve_reservations(u, &data.books))
            .collect()
    }

    /// Get a user by ID with reservations resolved
    pub async fn get_details(&self, id: Uuid) -> AppResult<UserDetails> {
        let data = self.data.read().await;
        data.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| resolve_reservations(u, &data.books))
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Get the stored user record by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.data
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Create a new user with an empty reservation list
    pub async fn create(&self, input: UserInput) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            reservations: Vec::new(),
        };
        self.data.write().await.users.push(user.clone());
        user
    }

    /// Replace every scalar field of a user; ID and reservations are preserved
    pub async fn update(&self, id: Uuid, input: UserInput) -> AppResult<()> {
        let mut data = self.data.write().await;
        let user = data
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;
        user.username = input.username;
        user.email = input.email;
        Ok(())
    }

    /// Delete a user together with the reservations it owns
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut data = self.data.write().await;
        let pos = data
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;
        data.users.remove(pos);
        Ok(())
    }

    /// Reserve a book for a user
    ///
    /// A reservation against an unknown book id is not an error: it is
    /// recorded with no book attached. Only a missing user fails.
    pub async fn add_reservation(
        &self,
        user_id: Uuid,
        input: CreateReservation,
    ) -> AppResult<Reservation> {
        let mut data = self.data.write().await;
        let book_id = data.books.iter().find(|b| b.id == input.book_id).map(|b| b.id);
        let pos = data
            .users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user_id)))?;

        let reservation = Reservation::new(book_id);
        data.users[pos].reservations.push(reservation.clone());
        Ok(reservation)
    }
}

/// Resolve each reservation's book id against the global collection
///
/// A book that was never found, or was deleted after the reservation was
/// made, shows up as `None`.
fn resolve_reservations(user: &User, books: &[Book]) -> UserDetails {
    let reservations = user
        .reservations
        .iter()
        .map(|r| ReservationDetails {
            id: r.id,
            book: r
                .book_id
                .and_then(|id| books.iter().find(|b| b.id == id).cloned()),
            loan_date: r.loan_date,
            due_date: r.due_date,
        })
        .collect();
    UserDetails {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        reservations,
    }
}
