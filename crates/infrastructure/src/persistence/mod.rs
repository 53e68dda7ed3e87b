//! SQLite persistence
//!
//! Read-only access to the `rest_areas` table behind an r2d2 connection
//! pool. The schema is bootstrapped on pool creation so a fresh database
//! file starts usable; loading the actual rest-area data stays external.

mod connection;
mod rest_area_store;

pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
pub use rest_area_store::SqliteRestAreaStore;
