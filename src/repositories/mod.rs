//! Storage seams for users and transactions.
//!
//! Handlers and services only see these traits; the in-memory implementations
//! are wired in `main` and can be swapped for a persistent store.

mod memory;

pub use memory::{InMemoryTransactionRepository, InMemoryUserRepository};

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{NewTransaction, Transaction, User};

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// All transactions in insertion order.
    async fn list(&self) -> AppResult<Vec<Transaction>>;

    /// Assign the next id and append. Ids are never reused.
    async fn insert(&self, tx: NewTransaction) -> AppResult<Transaction>;

    /// Remove by id, returning the removed record if it existed.
    async fn delete(&self, id: u64) -> AppResult<Option<Transaction>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a user with a fresh id. Fails with `UsernameTaken` on duplicates.
    async fn create(&self, username: &str, password_hash: &str) -> AppResult<User>;
}
