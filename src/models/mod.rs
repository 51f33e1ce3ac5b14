//! Data models for users and ledger transactions.

pub mod transaction;
pub mod user;

pub use transaction::*;
pub use user::*;
