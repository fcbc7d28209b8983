//! Axum HTTP surface for the Wayfarer booking service.
//!
//! Handlers are thin: they translate HTTP into calls on the domain
//! services from `wayfarer-core` and map [`wayfarer_core::BookingError`]
//! onto status codes. All authorization decisions live in the domain
//! layer; the only thing this crate decides is *who is calling*, via the
//! [`extractors::CurrentUser`] extractor.
//!
//! # Status mapping
//!
//! | Domain error      | HTTP |
//! |-------------------|------|
//! | `Unauthorized`    | 401  |
//! | `Forbidden`       | 403  |
//! | `NotFound`        | 404  |
//! | `InvalidArgument` | 400  |
//! | `Storage`         | 500  |
//!
//! The reference system reported both authorization failures as 401;
//! this implementation uses the conventional 401/403 split.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::AppError;
pub use routes::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
