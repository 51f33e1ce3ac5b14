//! HTTP request handlers.

pub mod http;
pub mod transactions;

pub use http::*;
pub use transactions::*;
