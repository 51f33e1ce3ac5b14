//! Business logic for the transaction ledger.

pub mod transaction;

pub use transaction::TransactionService;
