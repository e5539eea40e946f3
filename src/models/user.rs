//! User model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::reservation::{Reservation, ReservationDetails};

/// User record as held in the store; reservations are owned by the user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub reservations: Vec<Reservation>,
}

/// User with the book of each reservation resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDetails {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub reservations: Vec<ReservationDetails>,
}

/// Request body for creating or replacing a user (full overwrite on PUT)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserInput {
    pub username: String,
    pub email: String,
}
