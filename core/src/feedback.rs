//! Visitor feedback: public submission, admin triage.
//!
//! Feedback is the one surface anonymous visitors can write to, so
//! submission takes no principal. Everything after submission (listing,
//! status triage, removal) is admin-only.

use crate::error::{BookingError, Result};
use crate::principal::Principal;
use crate::providers::FeedbackStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Triage status of a feedback entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    /// Submitted, not yet looked at. Initial state.
    #[default]
    Pending,
    /// An admin has read it.
    Reviewed,
    /// Handled; kept for the record.
    Resolved,
}

impl FeedbackStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "resolved" => Ok(Self::Resolved),
            other => Err(BookingError::invalid(format!(
                "Invalid status '{other}'. Must be one of: pending, reviewed, resolved"
            ))),
        }
    }
}

/// One submitted feedback entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Opaque unique identifier, assigned at creation.
    pub id: Uuid,
    /// Submitter's display name, as typed.
    pub name: String,
    /// Contact email, as typed. Not verified.
    pub email: String,
    /// Short subject line.
    pub subject: String,
    /// Free-text body.
    pub message: String,
    /// Triage status.
    pub status: FeedbackStatus,
    /// Submission timestamp, system-assigned.
    pub created_at: DateTime<Utc>,
    /// Last-triage timestamp, system-assigned.
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied feedback submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    /// Submitter's display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Short subject line.
    pub subject: String,
    /// Free-text body.
    pub message: String,
}

/// Feedback desk over a pluggable store.
#[derive(Clone)]
pub struct FeedbackDesk {
    store: Arc<dyn FeedbackStore>,
}

impl FeedbackDesk {
    /// Create a desk over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    /// Accept a submission. No principal required.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidArgument`] if any field is blank or
    /// the email has no `@`.
    pub async fn submit(&self, submission: NewFeedback) -> Result<Feedback> {
        validate_submission(&submission)?;

        let now = Utc::now();
        let feedback = Feedback {
            id: Uuid::new_v4(),
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            status: FeedbackStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(&feedback).await?;

        tracing::info!(feedback_id = %feedback.id, subject = %feedback.subject, "Feedback submitted");
        Ok(feedback)
    }

    /// Every entry, newest-first. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Forbidden`] for non-admin principals.
    pub async fn list(&self, principal: &Principal) -> Result<Vec<Feedback>> {
        require_admin(principal)?;
        self.store.list().await
    }

    /// Move an entry to a new triage status. Admin only.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Forbidden`] for non-admin principals.
    /// - [`BookingError::NotFound`] if the entry does not exist.
    pub async fn set_status(
        &self,
        principal: &Principal,
        feedback_id: Uuid,
        status: FeedbackStatus,
    ) -> Result<Feedback> {
        require_admin(principal)?;

        let updated = self
            .store
            .update_status(feedback_id, status, Utc::now())
            .await?
            .ok_or(BookingError::not_found("Feedback"))?;

        tracing::info!(feedback_id = %feedback_id, status = %status, "Feedback triaged");
        Ok(updated)
    }

    /// Remove an entry. Admin only.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Forbidden`] for non-admin principals.
    /// - [`BookingError::NotFound`] if the entry does not exist.
    pub async fn remove(&self, principal: &Principal, feedback_id: Uuid) -> Result<()> {
        require_admin(principal)?;

        if !self.store.delete(feedback_id).await? {
            return Err(BookingError::not_found("Feedback"));
        }
        tracing::info!(feedback_id = %feedback_id, "Feedback removed");
        Ok(())
    }
}

fn require_admin(principal: &Principal) -> Result<()> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(BookingError::Forbidden)
    }
}

fn validate_submission(submission: &NewFeedback) -> Result<()> {
    if submission.name.trim().is_empty() {
        return Err(BookingError::invalid("name is required"));
    }
    if submission.email.trim().is_empty() || !submission.email.contains('@') {
        return Err(BookingError::invalid("a valid email is required"));
    }
    if submission.subject.trim().is_empty() {
        return Err(BookingError::invalid("subject is required"));
    }
    if submission.message.trim().is_empty() {
        return Err(BookingError::invalid("message is required"));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::mocks::MockFeedbackStore;
    use crate::principal::Role;

    fn submission(subject: &str) -> NewFeedback {
        NewFeedback {
            name: "Mara".to_string(),
            email: "mara@example.com".to_string(),
            subject: subject.to_string(),
            message: "The site search ignores location filters.".to_string(),
        }
    }

    fn desk() -> FeedbackDesk {
        FeedbackDesk::new(Arc::new(MockFeedbackStore::new()))
    }

    #[tokio::test]
    async fn submission_starts_pending() {
        let desk = desk();
        let feedback = desk.submit(submission("Search bug")).await.expect("submit");
        assert_eq!(feedback.status, FeedbackStatus::Pending);
        assert_eq!(feedback.subject, "Search bug");
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() {
        let desk = desk();

        let mut blank_message = submission("Subject");
        blank_message.message = "  ".to_string();
        assert!(matches!(
            desk.submit(blank_message).await,
            Err(BookingError::InvalidArgument { .. })
        ));

        let mut bad_email = submission("Subject");
        bad_email.email = "not-an-email".to_string();
        assert!(matches!(
            desk.submit(bad_email).await,
            Err(BookingError::InvalidArgument { .. })
        ));
    }

    #[tokio::test]
    async fn listing_and_triage_are_admin_only() {
        let desk = desk();
        let user = Principal::new(Uuid::new_v4(), Role::User);
        let feedback = desk.submit(submission("Subject")).await.expect("submit");

        assert_eq!(desk.list(&user).await, Err(BookingError::Forbidden));
        assert_eq!(
            desk.set_status(&user, feedback.id, FeedbackStatus::Reviewed)
                .await,
            Err(BookingError::Forbidden)
        );
        assert_eq!(
            desk.remove(&user, feedback.id).await,
            Err(BookingError::Forbidden)
        );
    }

    #[tokio::test]
    async fn admin_triages_and_removes() {
        let desk = desk();
        let admin = Principal::new(Uuid::new_v4(), Role::Admin);
        let first = desk.submit(submission("First")).await.expect("submit");
        let second = desk.submit(submission("Second")).await.expect("submit");

        let listed = desk.list(&admin).await.expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id, "newest first");

        let triaged = desk
            .set_status(&admin, first.id, FeedbackStatus::Resolved)
            .await
            .expect("set status");
        assert_eq!(triaged.status, FeedbackStatus::Resolved);

        desk.remove(&admin, first.id).await.expect("remove");
        assert_eq!(desk.list(&admin).await.expect("list").len(), 1);
        assert_eq!(
            desk.remove(&admin, first.id).await,
            Err(BookingError::not_found("Feedback"))
        );
    }

    #[test]
    fn unknown_status_is_invalid_argument() {
        let err = "archived".parse::<FeedbackStatus>();
        assert!(matches!(err, Err(BookingError::InvalidArgument { .. })));
    }
}
