//! Data storage layer
//!
//! - `postgres` - the company store: pool management, migrations, filters,
//!   read-only repositories
//! - `types` - shared row types

pub mod postgres;
pub mod types;

pub use postgres::{NameMatch, PostgresError, PostgresService, SearchFilters};
pub use types::{CompanyRow, CountryCount, SizeCount, StatsResult};
