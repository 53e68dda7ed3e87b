//! Database connection management
//!
//! Provides SQLite connection pooling via r2d2.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database setup error: {0}")]
    Setup(String),
}

/// SQLite connection pool type alias
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Pooled connection type alias
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a new connection pool and bootstrap the schema
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    info!(path = %config.path, max_connections = config.max_connections, "Creating database connection pool");

    let manager = if config.path == ":memory:" {
        SqliteConnectionManager::memory()
    } else {
        if let Some(parent) = Path::new(&config.path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DatabaseError::Setup(format!("Failed to create database directory: {e}"))
                })?;
            }
        }
        SqliteConnectionManager::file(&config.path)
    };

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)?;

    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
    }

    debug!("Database connection pool created successfully");
    Ok(pool)
}

/// Apply pragmas and create the rest-area schema if missing
fn initialize_database(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;

        CREATE TABLE IF NOT EXISTS rest_areas (
            id        INTEGER PRIMARY KEY,
            name      TEXT NOT NULL,
            route_no  TEXT NOT NULL,
            direction TEXT NOT NULL,
            lat       REAL NOT NULL,
            lng       REAL NOT NULL,
            food      TEXT NOT NULL DEFAULT '',
            gas       INTEGER NOT NULL DEFAULT 0,
            elec      INTEGER NOT NULL DEFAULT 0,
            pharmacy  INTEGER NOT NULL DEFAULT 0,
            nurse     INTEGER NOT NULL DEFAULT 0,
            tel       TEXT NOT NULL DEFAULT ''
        );
        ",
    )?;
    Ok(())
}
