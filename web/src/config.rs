//! Environment-driven server configuration.

use wayfarer_core::TransitionPolicy;

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Listen address (`BIND_ADDR`, default `0.0.0.0:5000`).
    pub bind_addr: String,
    /// Admin transition policy (`TRANSITION_POLICY`, `permissive` or
    /// `strict`, default permissive — the reference behavior).
    pub transition_policy: TransitionPolicy,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or
    /// `TRANSITION_POLICY` is set to an unknown value.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let transition_policy = match std::env::var("TRANSITION_POLICY").as_deref() {
            Err(_) | Ok("permissive") => TransitionPolicy::Permissive,
            Ok("strict") => TransitionPolicy::Strict,
            Ok(other) => anyhow::bail!("Unknown TRANSITION_POLICY '{other}'"),
        };

        Ok(Self {
            database_url,
            bind_addr,
            transition_policy,
        })
    }
}
