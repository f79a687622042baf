//! Business logic

pub mod companies;

pub use companies::{CompanyService, LookupError};
