//! Auth application service: credential checks, registration, password hashing.

use std::sync::Arc;

use crate::config::SeedUser;
use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::repositories::UserRepository;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::{info, instrument, warn};

/// Argon2id hash of no real password, verified against when the username is
/// unknown so both rejection paths cost one full Argon2 run.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

#[derive(Clone)]
pub struct AuthAppService {
    users: Arc<dyn UserRepository>,
}

impl AuthAppService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Insert the configured seed users, hashing their passwords.
    pub async fn seed(&self, seed_users: &[SeedUser]) -> AppResult<()> {
        for seed in seed_users {
            let hash = Self::hash_password(&seed.password)?;
            let user = self.users.create(&seed.username, &hash).await?;
            info!(user_id = user.id, username = %user.username, "seed user created");
        }
        Ok(())
    }

    /// Look up `username` and check `password`. Unknown users and wrong
    /// passwords yield the same `InvalidCredentials` error.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        if username.is_empty() || password.is_empty() {
            warn!("login with empty credentials");
            return Err(AppError::InvalidCredentials);
        }

        let user = match self.users.find_by_username(username).await? {
            Some(user) => user,
            None => {
                Self::verify_password(password, DUMMY_PASSWORD_HASH)?;
                warn!("login for unknown user");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !Self::verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        info!(user_id = user.id, "user authenticated");
        Ok(user)
    }

    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::UsernameTaken);
        }
        let hash = Self::hash_password(password)?;
        let user = self.users.create(username, &hash).await?;
        info!(user_id = user.id, "user registered");
        Ok(user)
    }

    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash: {}", e)))?
            .to_string();
        Ok(hash)
    }

    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| AppError::Internal(anyhow::anyhow!("parse hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserRepository;

    async fn seeded() -> AuthAppService {
        let service = AuthAppService::new(Arc::new(InMemoryUserRepository::new()));
        service
            .seed(&[SeedUser {
                username: "test".to_string(),
                password: "password".to_string(),
            }])
            .await
            .unwrap();
        service
    }

    #[test]
    fn hash_and_verify_password() {
        let hash = AuthAppService::hash_password("mypassword").unwrap();
        assert!(AuthAppService::verify_password("mypassword", &hash).unwrap());
        assert!(!AuthAppService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(AuthAppService::verify_password("anything", "not-a-valid-hash").is_err());
    }

    #[test]
    fn dummy_hash_parses_and_never_matches() {
        assert!(!AuthAppService::verify_password("password", DUMMY_PASSWORD_HASH).unwrap());
        assert!(!AuthAppService::verify_password("", DUMMY_PASSWORD_HASH).unwrap());
    }

    #[tokio::test]
    async fn authenticate_accepts_seeded_user() {
        let service = seeded().await;
        let user = service.authenticate("test", "password").await.unwrap();
        assert_eq!(user.username, "test");
        assert_ne!(user.password_hash, "password");
    }

    #[tokio::test]
    async fn authenticate_rejects_everything_else_uniformly() {
        let service = seeded().await;
        for (username, password) in [("test", "wrong"), ("nobody", "password"), ("", ""), ("test", "")] {
            let err = service.authenticate(username, password).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidCredentials));
        }
    }

    #[tokio::test]
    async fn unknown_user_costs_as_much_as_wrong_password() {
        let service = seeded().await;

        let start = std::time::Instant::now();
        assert!(service.authenticate("test", "wrong").await.is_err());
        let wrong_password = start.elapsed();

        let start = std::time::Instant::now();
        assert!(service.authenticate("nobody", "wrong").await.is_err());
        let unknown_user = start.elapsed();

        // Both paths run one Argon2 verify; without it the unknown path is
        // several orders of magnitude faster.
        assert!(
            unknown_user * 10 >= wrong_password,
            "unknown user {:?} vs wrong password {:?}",
            unknown_user,
            wrong_password
        );
    }

    #[tokio::test]
    async fn register_then_authenticate() {
        let service = seeded().await;
        let user = service.register("alice", "wonderland").await.unwrap();
        assert_eq!(user.id, 2);
        assert!(service.authenticate("alice", "wonderland").await.is_ok());
        assert!(matches!(
            service.register("alice", "another-pass").await,
            Err(AppError::UsernameTaken)
        ));
    }
}
