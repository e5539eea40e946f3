//! Reservation model and related types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::book::Book;

/// Fixed loan policy: every reservation is due seven days after it starts
pub const LOAN_PERIOD_DAYS: i64 = 7;

/// Reservation record as held on its owning user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    pub id: Uuid,
    /// Id of the reserved book; `None` when no matching book existed at
    /// creation time
    pub book_id: Option<Uuid>,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl Reservation {
    /// Build a reservation starting now, due after the fixed loan period
    pub fn new(book_id: Option<Uuid>) -> Self {
        let loan_date = Utc::now();
        Self {
            id: Uuid::new_v4(),
            book_id,
            loan_date,
            due_date: loan_date + Duration::days(LOAN_PERIOD_DAYS),
        }
    }
}

/// Reservation with its book reference resolved to a full record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationDetails {
    pub id: Uuid,
    /// `None` when the book was never found or has since been deleted
    pub book: Option<Book>,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

/// Request body for reserving a book for a user
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservation {
    pub book_id: Uuid,
}
