//! PostgreSQL backend: pool, migrations, and the JSONB document store.

pub mod connection;
pub mod documents;

pub use connection::{connect_pool, migrate, redact_url};
pub use documents::PgStore;
