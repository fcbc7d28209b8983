//! Domain core for the Wayfarer travel-package booking service.
//!
//! This crate owns the booking ledger: the one piece of the system with
//! stateful semantics worth isolating. It is split along the seams the
//! service actually has:
//!
//! - **Catalog**: package entities (price, capacity, duration). Admin-only
//!   writes, public reads. The ledger only consults it at booking creation.
//! - **Booking Ledger**: booking entities, price freezing, and the status
//!   transition rules.
//! - **Identity**: an external collaborator that turns a bearer credential
//!   into a [`Principal`]. The ledger trusts the resolved principal and
//!   never reads ambient credential state.
//! - **Feedback**: visitor-submitted feedback with admin triage. The only
//!   surface anonymous callers can write to.
//!
//! Storage and identity are abstracted behind the traits in [`providers`];
//! `wayfarer-postgres` supplies the production implementations and
//! [`mocks`] supplies in-memory ones for tests.
//!
//! # Example
//!
//! ```ignore
//! use wayfarer_core::{BookingLedger, NewBooking, TransitionPolicy};
//!
//! let ledger = BookingLedger::new(bookings, packages, identity, TransitionPolicy::Permissive);
//! let view = ledger.create(&principal, intent).await?;
//! assert_eq!(view.booking.total_price, 300.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod booking;
pub mod catalog;
pub mod error;
pub mod feedback;
pub mod ledger;
pub mod mocks;
pub mod package;
pub mod policy;
pub mod principal;
pub mod providers;

pub use booking::{Booking, BookingStatus, BookingView, NewBooking, PackageSnapshot, UserSnapshot};
pub use catalog::Catalog;
pub use error::{BookingError, Result};
pub use feedback::{Feedback, FeedbackDesk, FeedbackStatus, NewFeedback};
pub use ledger::BookingLedger;
pub use package::{Difficulty, Package, PackageDraft, PackageUpdate};
pub use policy::TransitionPolicy;
pub use principal::{Principal, Role};
pub use providers::{BookingStore, FeedbackStore, IdentityResolver, PackageStore};
