//! Mock identity resolver.

use crate::booking::UserSnapshot;
use crate::error::{BookingError, Result};
use crate::principal::Principal;
use crate::providers::IdentityResolver;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory identity resolver.
///
/// Tests register `(token, principal)` pairs up front; any other token
/// resolves to `Unauthorized`, which is also how revocation is simulated.
#[derive(Debug, Clone)]
pub struct MockIdentityResolver {
    tokens: Arc<Mutex<HashMap<String, Principal>>>,
    users: Arc<Mutex<HashMap<Uuid, UserSnapshot>>>,
}

impl MockIdentityResolver {
    /// Create an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(Mutex::new(HashMap::new())),
            users: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Register a bearer token for a principal.
    pub fn add_token(&self, token: impl Into<String>, principal: Principal) {
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.insert(token.into(), principal);
        }
    }

    /// Register a display snapshot for a user id.
    pub fn add_user(&self, user_id: Uuid, name: &str, email: &str) {
        if let Ok(mut users) = self.users.lock() {
            users.insert(
                user_id,
                UserSnapshot {
                    id: user_id,
                    name: name.to_string(),
                    email: email.to_string(),
                },
            );
        }
    }
}

impl Default for MockIdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityResolver for MockIdentityResolver {
    async fn resolve(&self, bearer_token: &str) -> Result<Principal> {
        self.tokens
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .get(bearer_token)
            .copied()
            .ok_or(BookingError::Unauthorized)
    }

    async fn user_snapshot(&self, user_id: Uuid) -> Result<Option<UserSnapshot>> {
        Ok(self
            .users
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .get(&user_id)
            .cloned())
    }
}
