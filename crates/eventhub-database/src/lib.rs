//! # eventhub-database
//!
//! PostgreSQL persistence layer: connection pool, migrations, and the
//! user/event repositories.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
