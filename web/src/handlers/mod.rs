//! HTTP handlers.

pub mod bookings;
pub mod feedback;
pub mod health;
pub mod packages;
