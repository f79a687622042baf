//! API route handlers

pub mod companies;
pub mod health;
pub mod root;
pub mod stats;
