//! Authentication: login, register, JWT.

mod handlers;
mod jwt;
mod service;

pub use handlers::{login, register, LoginRequest, LoginResponse, RegisterRequest};
pub use jwt::{Claims, JwtKeys};
pub use service::AuthAppService;
