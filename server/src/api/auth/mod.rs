//! Bearer token authentication

mod middleware;

pub use middleware::{ApiToken, AuthError, AuthState, require_auth};
