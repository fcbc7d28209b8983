//! Status-transition authorization.
//!
//! All transition decisions funnel through [`TransitionPolicy::authorize`]
//! so the admin rule can be swapped without touching calling code. The
//! owner rule is fixed: a non-admin may do exactly `pending -> cancelled`
//! on their own booking.

use crate::booking::{Booking, BookingStatus};
use crate::error::{BookingError, Result};
use crate::principal::Principal;

/// How admin-initiated transitions are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Reference behavior: an admin may set any of the four statuses from
    /// any current state, including moving a cancelled booking back to
    /// confirmed.
    #[default]
    Permissive,
    /// Monotone machine: `pending -> {confirmed, cancelled}`,
    /// `confirmed -> completed`, terminal states frozen. Setting the
    /// current status again is a no-op and allowed.
    Strict,
}

impl TransitionPolicy {
    /// Decide whether `principal` may move `booking` to `target`.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Forbidden`] when the principal may not act on
    ///   this booking, or an owner attempts anything other than
    ///   `pending -> cancelled`.
    /// - [`BookingError::InvalidArgument`] when an admin attempts a
    ///   transition the strict machine rejects.
    pub fn authorize(
        self,
        principal: &Principal,
        booking: &Booking,
        target: BookingStatus,
    ) -> Result<()> {
        if principal.is_admin() {
            return match self {
                Self::Permissive => Ok(()),
                Self::Strict => {
                    if booking.status == target || step_allowed(booking.status, target) {
                        Ok(())
                    } else {
                        Err(BookingError::invalid(format!(
                            "Cannot move a {} booking to {}",
                            booking.status, target
                        )))
                    }
                }
            };
        }

        if booking.user_id != principal.id {
            return Err(BookingError::Forbidden);
        }

        // Owner path, identical under both policies.
        if booking.status == BookingStatus::Pending && target == BookingStatus::Cancelled {
            Ok(())
        } else {
            Err(BookingError::Forbidden)
        }
    }
}

/// One step of the monotone state machine.
const fn step_allowed(from: BookingStatus, to: BookingStatus) -> bool {
    matches!(
        (from, to),
        (
            BookingStatus::Pending,
            BookingStatus::Confirmed | BookingStatus::Cancelled
        ) | (BookingStatus::Confirmed, BookingStatus::Completed)
    )
}
