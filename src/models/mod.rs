//! Data models for the Livraria catalog

pub mod author;
pub mod book;
pub mod reservation;
pub mod user;

// Re-export commonly used types
pub use author::{Author, AuthorDetails};
pub use book::Book;
pub use reservation::{Reservation, ReservationDetails};
pub use user::{User, UserDetails};
