//! SQLite-based rest-area repository
//!
//! Read-only. Store failures never propagate as errors: every failure
//! path collapses to `RestAreaFetch::Unavailable` with a warning log, so
//! the route flow can keep answering without rest-area data.

use std::sync::Arc;

use application::ports::{RestAreaFetch, RestAreaStorePort};
use async_trait::async_trait;
use domain::RestArea;
use rusqlite::Row;
use tokio::task;
use tracing::{debug, instrument, warn};

use super::connection::ConnectionPool;

const SELECT_COLUMNS: &str =
    "SELECT id, name, route_no, direction, lat, lng, food, gas, elec, pharmacy, nurse, tel \
     FROM rest_areas";

/// SQLite-backed rest-area store
#[derive(Debug, Clone)]
pub struct SqliteRestAreaStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteRestAreaStore {
    /// Create a new store over an existing pool
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Run one blocking query, folding every failure into `Unavailable`
    async fn fetch(
        &self,
        sql: String,
        params: Vec<String>,
    ) -> RestAreaFetch {
        let pool = Arc::clone(&self.pool);

        let result = task::spawn_blocking(move || -> Result<Vec<RestArea>, String> {
            let conn = pool.get().map_err(|e| e.to_string())?;
            let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
            let rows = stmt
                .query_map(rusqlite::params_from_iter(params.iter()), row_to_rest_area)
                .map_err(|e| e.to_string())?;
            rows.collect::<Result<Vec<_>, _>>().map_err(|e| e.to_string())
        })
        .await;

        match result {
            Ok(Ok(areas)) => {
                debug!(count = areas.len(), "Fetched rest areas");
                RestAreaFetch::Loaded(areas)
            },
            Ok(Err(e)) => {
                warn!(error = %e, "Rest-area query failed");
                RestAreaFetch::Unavailable
            },
            Err(e) => {
                warn!(error = %e, "Rest-area query task failed");
                RestAreaFetch::Unavailable
            },
        }
    }
}

#[async_trait]
impl RestAreaStorePort for SqliteRestAreaStore {
    #[instrument(skip(self))]
    async fn list_all(&self) -> RestAreaFetch {
        self.fetch(format!("{SELECT_COLUMNS} ORDER BY id"), Vec::new())
            .await
    }

    #[instrument(skip(self))]
    async fn list_by_route(&self, route_no: &str) -> RestAreaFetch {
        self.fetch(
            format!("{SELECT_COLUMNS} WHERE route_no = ?1 ORDER BY id"),
            vec![route_no.to_string()],
        )
        .await
    }
}

/// Map one row of the rest-area table
fn row_to_rest_area(row: &Row<'_>) -> Result<RestArea, rusqlite::Error> {
    Ok(RestArea {
        id: row.get(0)?,
        name: row.get(1)?,
        route_no: row.get(2)?,
        direction: row.get(3)?,
        lat: row.get(4)?,
        lng: row.get(5)?,
        food: row.get(6)?,
        gas: row.get::<_, i64>(7)? != 0,
        elec: row.get::<_, i64>(8)? != 0,
        pharmacy: row.get::<_, i64>(9)? != 0,
        nurse: row.get::<_, i64>(10)? != 0,
        tel: row.get(11)?,
    })
}
