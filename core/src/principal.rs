//! Authenticated principals.
//!
//! Every service call takes a resolved [`Principal`] as an explicit
//! argument. Credential material (the bearer token) never crosses into
//! this crate; resolution happens at the HTTP boundary via
//! [`crate::providers::IdentityResolver`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role attached to a principal by the identity collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer.
    User,
    /// Elevated role; unrestricted status transitions and catalog writes.
    Admin,
}

/// The authenticated identity performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Identity id, assigned by the identity collaborator.
    pub id: Uuid,
    /// Role for authorization decisions.
    pub role: Role,
}

impl Principal {
    /// Create a principal with the given id and role.
    #[must_use]
    pub const fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    /// Whether this principal carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[test]
    fn admin_flag_follows_role() {
        let admin = Principal::new(Uuid::new_v4(), Role::Admin);
        let user = Principal::new(Uuid::new_v4(), Role::User);
        assert!(admin.is_admin());
        assert!(!user.is_admin());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Admin).expect("role serializes");
        assert_eq!(json, "\"admin\"");
    }
}
