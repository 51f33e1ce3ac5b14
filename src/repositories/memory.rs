//! Process-lifetime stores guarded by `tokio::sync::RwLock`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{TransactionRepository, UserRepository};
use crate::error::{AppError, AppResult};
use crate::models::{NewTransaction, Transaction, User};

struct Ledger {
    next_id: u64,
    items: Vec<Transaction>,
}

/// In-memory transaction list with a monotonic id counter.
pub struct InMemoryTransactionRepository {
    ledger: RwLock<Ledger>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self {
            ledger: RwLock::new(Ledger {
                next_id: 1,
                items: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryTransactionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn list(&self) -> AppResult<Vec<Transaction>> {
        Ok(self.ledger.read().await.items.clone())
    }

    async fn insert(&self, tx: NewTransaction) -> AppResult<Transaction> {
        let mut ledger = self.ledger.write().await;
        let id = ledger.next_id;
        ledger.next_id += 1;
        let stored = tx.into_transaction(id);
        ledger.items.push(stored.clone());
        debug!(id, len = ledger.items.len(), "transaction stored");
        Ok(stored)
    }

    async fn delete(&self, id: u64) -> AppResult<Option<Transaction>> {
        let mut ledger = self.ledger.write().await;
        let position = ledger.items.iter().position(|t| t.id == id);
        Ok(position.map(|idx| ledger.items.remove(idx)))
    }
}

struct Directory {
    next_id: u64,
    users: Vec<User>,
}

/// In-memory user list; usernames are unique.
pub struct InMemoryUserRepository {
    directory: RwLock<Directory>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            directory: RwLock::new(Directory {
                next_id: 1,
                users: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let directory = self.directory.read().await;
        Ok(directory
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> AppResult<User> {
        let mut directory = self.directory.write().await;
        if directory.users.iter().any(|u| u.username == username) {
            return Err(AppError::UsernameTaken);
        }
        let user = User {
            id: directory.next_id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        directory.next_id += 1;
        directory.users.push(user.clone());
        Ok(user)
    }
}
