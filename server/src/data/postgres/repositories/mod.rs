//! Read-only repositories over the company store

pub mod company;
pub mod stats;
