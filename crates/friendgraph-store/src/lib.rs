//! Friendgraph Storage Layer
//!
//! Implements the EdgeStore trait using SQLite.
//!
//! # Architecture
//!
//! - One `edges` table holding every directed relationship record
//! - A partial unique index making friendship creation race-safe
//! - Pure data access: business rules live in friendgraph-engine
//!
//! # Examples
//!
//! ```no_run
//! use friendgraph_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for edge operations
//! ```

#![warn(missing_docs)]

use friendgraph_domain::{Edge, EdgeStatus, EdgeStore, Identifier};
use rusqlite::{params, Connection, Row};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A friend edge for this ordered pair already exists
    #[error("friendship already recorded")]
    FriendshipExists,

    /// Invalid data found in a stored row
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of EdgeStore
///
/// Provides persistent storage for relationship edges. The two inserts that
/// make up a friendship are wrapped in one transaction, so a half-written
/// friendship is never visible to readers.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteStore instance; SQLite's own locking arbitrates between them.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use friendgraph_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("friendgraph.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Decode a stored identifier column
    fn identifier_from_sql(idx: usize, value: String) -> rusqlite::Result<Identifier> {
        Identifier::parse(&value).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(StoreError::InvalidData(e)),
            )
        })
    }

    /// Decode a stored status column
    fn status_from_sql(idx: usize, value: String) -> rusqlite::Result<EdgeStatus> {
        EdgeStatus::parse(&value).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(StoreError::InvalidData(format!(
                    "Unknown edge status: {}",
                    value
                ))),
            )
        })
    }

    /// Map a row from the edges table (requestor, target, status,
    /// created_at, updated_at) into an Edge
    fn row_to_edge(row: &Row<'_>) -> rusqlite::Result<Edge> {
        let requestor = Self::identifier_from_sql(0, row.get(0)?)?;
        let target = Self::identifier_from_sql(1, row.get(1)?)?;
        let status = Self::status_from_sql(2, row.get(2)?)?;

        Ok(Edge {
            requestor,
            target,
            status,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }

    /// Translate a unique-index violation on the friend-pair index into the
    /// dedicated conflict variant
    fn map_insert_error(e: rusqlite::Error) -> StoreError {
        match e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::FriendshipExists
            }
            other => StoreError::Database(other),
        }
    }
}

impl EdgeStore for SqliteStore {
    type Error = StoreError;

    fn insert_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
        self.conn
            .execute(
                "INSERT INTO edges (requestor, target, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    edge.requestor.as_str(),
                    edge.target.as_str(),
                    edge.status.as_str(),
                    edge.created_at,
                    edge.updated_at,
                ],
            )
            .map_err(Self::map_insert_error)?;

        Ok(())
    }

    fn insert_friendship(
        &mut self,
        a: &Identifier,
        b: &Identifier,
        now: i64,
    ) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;

        for (requestor, target) in [(a, b), (b, a)] {
            tx.execute(
                "INSERT INTO edges (requestor, target, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    requestor.as_str(),
                    target.as_str(),
                    EdgeStatus::Friend.as_str(),
                    now,
                    now,
                ],
            )
            .map_err(Self::map_insert_error)?;
        }

        tx.commit()?;
        Ok(())
    }

    fn edges_between(&self, a: &Identifier, b: &Identifier) -> Result<Vec<Edge>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT requestor, target, status, created_at, updated_at FROM edges
             WHERE (requestor = ?1 AND target = ?2)
                OR (requestor = ?2 AND target = ?1)",
        )?;

        let edges = stmt
            .query_map(params![a.as_str(), b.as_str()], Self::row_to_edge)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(edges)
    }

    fn friends_of(&self, user: &Identifier) -> Result<Vec<Identifier>, Self::Error> {
        // Self-join: an outgoing friend edge only counts when the reverse
        // friend edge exists as well.
        let mut stmt = self.conn.prepare(
            "SELECT outgoing.target FROM edges outgoing
             JOIN edges incoming
               ON incoming.requestor = outgoing.target
              AND incoming.target = outgoing.requestor
             WHERE outgoing.requestor = ?1
               AND outgoing.status = ?2
               AND incoming.status = ?2",
        )?;

        let friends = stmt
            .query_map(
                params![user.as_str(), EdgeStatus::Friend.as_str()],
                |row| Self::identifier_from_sql(0, row.get(0)?),
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(friends)
    }

    fn delete_all_edges(&mut self) -> Result<(), Self::Error> {
        self.conn.execute("DELETE FROM edges", [])?;
        Ok(())
    }

    fn is_conflict(err: &Self::Error) -> bool {
        matches!(err, StoreError::FriendshipExists)
    }
}
