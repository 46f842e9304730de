//! Database session management
//!
//! Provides the single shared PostgreSQL session used by the truck-finder
//! query layer: credentials from the environment, lazy construction (the
//! connection is opened by the first query, not here), and explicit shutdown.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Database session configuration
#[derive(Clone)]
pub struct SessionConfig {
    /// Application name reported to the server and used in log events
    pub application_name: String,
    /// Database server host
    pub host: String,
    /// Database name
    pub database: String,
    /// Login role
    pub username: String,
    /// Login password
    pub password: String,
    /// Timeout for acquiring the session for a query
    pub acquire_timeout_secs: u64,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("application_name", &self.application_name)
            .field("host", &self.host)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            application_name: String::from("truck-finder"),
            host: String::new(),
            database: String::new(),
            username: String::new(),
            password: String::new(),
            acquire_timeout_secs: 10,
        }
    }
}

impl SessionConfig {
    /// Create a new SessionConfig from environment variables.
    ///
    /// Missing credentials are left empty rather than rejected here: the
    /// driver surfaces them as a connection failure on first use.
    pub fn from_env(application_name: &str) -> Self {
        Self {
            application_name: application_name.to_string(),
            host: std::env::var("DB_HOST").unwrap_or_default(),
            database: std::env::var("DB_NAME").unwrap_or_default(),
            username: std::env::var("DB_USER").unwrap_or_default(),
            password: std::env::var("DB_PASSWORD").unwrap_or_default(),
            acquire_timeout_secs: std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Log session configuration details
    pub fn log_config(&self) {
        info!(
            "Database session configuration: host={}, database={}, username={}, \
             acquire_timeout={}s",
            self.host, self.database, self.username, self.acquire_timeout_secs
        );
    }

    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
            .application_name(&self.application_name)
    }
}

/// Create the lazily-opened session pool.
///
/// No I/O happens here: the first query opens the connection and every later
/// query reuses it. `max_connections(1)` keeps at most one live session; the
/// server's session semantics are the concurrency boundary.
pub fn connect_session(config: &SessionConfig) -> PgPool {
    debug!(
        "Creating database session: application={}, host={}, database={}, acquire_timeout={}s",
        config.application_name, config.host, config.database, config.acquire_timeout_secs
    );

    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        // Re-verify the session before reuse so a dropped connection is
        // re-established instead of failing the next query
        .test_before_acquire(true)
        .connect_lazy_with(config.connect_options())
}

/// Close the session. Call once at process teardown; callers must sequence
/// it after in-flight queries complete.
pub async fn close_session(pool: &PgPool) {
    info!("Closing database session");
    pool.close().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_from_env_reads_credentials() {
        std::env::set_var("DB_HOST", "db.example.com");
        std::env::set_var("DB_NAME", "sf_trucks");
        std::env::set_var("DB_USER", "sandbox");
        std::env::set_var("DB_PASSWORD", "readonly");
        std::env::set_var("DB_ACQUIRE_TIMEOUT_SECS", "3");

        let config = SessionConfig::from_env("truck-finder-test");
        assert_eq!(config.application_name, "truck-finder-test");
        assert_eq!(config.host, "db.example.com");
        assert_eq!(config.database, "sf_trucks");
        assert_eq!(config.username, "sandbox");
        assert_eq!(config.password, "readonly");
        assert_eq!(config.acquire_timeout_secs, 3);

        std::env::remove_var("DB_HOST");
        std::env::remove_var("DB_NAME");
        std::env::remove_var("DB_USER");
        std::env::remove_var("DB_PASSWORD");
        std::env::remove_var("DB_ACQUIRE_TIMEOUT_SECS");
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_missing_credentials_stay_empty() {
        std::env::remove_var("DB_HOST");
        std::env::remove_var("DB_NAME");
        std::env::remove_var("DB_USER");
        std::env::remove_var("DB_PASSWORD");
        std::env::remove_var("DB_ACQUIRE_TIMEOUT_SECS");

        // Absent credentials must not fail construction; they surface as a
        // connection failure on first use instead.
        let config = SessionConfig::from_env("truck-finder-test");
        assert!(config.host.is_empty());
        assert!(config.database.is_empty());
        assert!(config.username.is_empty());
        assert!(config.password.is_empty());
        assert_eq!(config.acquire_timeout_secs, 10);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = SessionConfig {
            password: String::from("hunter2"),
            ..SessionConfig::default()
        };

        let rendered = format!("{:?}", config);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_connect_session_is_lazy() {
        // An unreachable host must not matter at construction time.
        let config = SessionConfig {
            host: String::from("db.invalid"),
            database: String::from("sf_trucks"),
            username: String::from("sandbox"),
            password: String::from("readonly"),
            ..SessionConfig::default()
        };

        let pool = tokio_test::block_on(async { connect_session(&config) });
        assert!(!pool.is_closed());
    }

    #[test]
    fn test_close_session_marks_pool_closed() {
        tokio_test::block_on(async {
            let pool = connect_session(&SessionConfig::default());
            close_session(&pool).await;
            assert!(pool.is_closed());
        });
    }
}
