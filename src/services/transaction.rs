//! Transaction ledger operations on top of a `TransactionRepository`.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{CreateTransactionRequest, NewTransaction, Transaction};
use crate::repositories::TransactionRepository;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct TransactionService {
    repo: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> AppResult<Vec<Transaction>> {
        self.repo.list().await
    }

    /// Validate and append. Nothing is stored when validation fails.
    #[instrument(skip(self, req))]
    pub async fn create(&self, req: CreateTransactionRequest) -> AppResult<Transaction> {
        let new_tx = NewTransaction::try_from(req)?;
        let tx = self.repo.insert(new_tx).await?;
        info!(id = tx.id, date = %tx.date, amount = tx.amount, "transaction created");
        Ok(tx)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> AppResult<Transaction> {
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", id)))?;
        info!(id, "transaction deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryTransactionRepository;

    fn service() -> TransactionService {
        TransactionService::new(Arc::new(InMemoryTransactionRepository::new()))
    }

    fn groceries() -> CreateTransactionRequest {
        CreateTransactionRequest {
            date: Some("2025-01-01".to_string()),
            amount: Some(50.0),
            description: Some("Groceries".to_string()),
        }
    }

    #[tokio::test]
    async fn create_appends_to_the_end() {
        let service = service();
        service.create(groceries()).await.unwrap();
        let before = service.list().await.unwrap().len();

        let created = service.create(groceries()).await.unwrap();
        let all = service.list().await.unwrap();
        assert_eq!(created.id, before as u64 + 1);
        assert_eq!(all.last(), Some(&created));
        assert_eq!(created.description, "Groceries");
    }

    #[tokio::test]
    async fn invalid_create_leaves_list_untouched() {
        let service = service();
        service.create(groceries()).await.unwrap();

        let mut req = groceries();
        req.description = Some(String::new());
        let err = service.create(req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() {
        let service = service();
        let err = service.delete(9).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let service = service();
        let a = service.create(groceries()).await.unwrap();
        let b = service.create(groceries()).await.unwrap();
        service.delete(a.id).await.unwrap();
        assert_eq!(service.list().await.unwrap(), vec![b]);
    }
}
