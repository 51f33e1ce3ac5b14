//! Application configuration loaded from environment.

use std::net::SocketAddr;

/// Minimum accepted length of `JWT_SECRET`, in bytes.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Default token lifetime: one hour.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// A username/password pair to seed the user store with at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Application configuration loaded from `.env` and environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g. `0.0.0.0:5000`).
    pub server_addr: SocketAddr,
    /// JWT signing secret (min 32 bytes). Required, there is no fallback.
    pub jwt_secret: String,
    /// Lifetime of issued tokens in seconds.
    pub token_ttl_secs: i64,
    /// Users present at startup.
    pub seed_users: Vec<SeedUser>,
    /// Log level: `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Config {
    /// Load configuration from environment. Call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:5000".to_string());
        let server_addr: SocketAddr = server_addr
            .parse()
            .map_err(|_| ConfigLoadError::InvalidServerAddr)?;

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigLoadError::MissingJwtSecret)?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigLoadError::WeakJwtSecret);
        }

        let token_ttl_secs = match lookup("TOKEN_TTL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or(ConfigLoadError::InvalidTokenTtl)?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let seed_users = match lookup("SEED_USERS") {
            Some(raw) => parse_seed_users(&raw)?,
            None => vec![SeedUser {
                username: "test".to_string(),
                password: "password".to_string(),
            }],
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let json_logs = lookup("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);

        Ok(Self {
            server_addr,
            jwt_secret,
            token_ttl_secs,
            seed_users,
            log_level,
            json_logs,
        })
    }
}

/// Parse `user1:pass1,user2:pass2`. Empty entries are skipped.
fn parse_seed_users(raw: &str) -> Result<Vec<SeedUser>, ConfigLoadError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (username, password) = entry
                .split_once(':')
                .ok_or(ConfigLoadError::InvalidSeedUsers)?;
            let username = username.trim();
            if username.is_empty() || password.is_empty() {
                return Err(ConfigLoadError::InvalidSeedUsers);
            }
            Ok(SeedUser {
                username: username.to_string(),
                password: password.to_string(),
            })
        })
        .collect()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigLoadError {
    #[error("Invalid SERVER_ADDR")]
    InvalidServerAddr,
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,
    #[error("JWT_SECRET must be at least 32 bytes")]
    WeakJwtSecret,
    #[error("TOKEN_TTL_SECS must be a positive integer")]
    InvalidTokenTtl,
    #[error("SEED_USERS must be a comma-separated list of username:password")]
    InvalidSeedUsers,
}
