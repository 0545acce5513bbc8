//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Edge, Identifier};

/// Trait for persisting and querying relationship edges
///
/// Implemented by the infrastructure layer (friendgraph-store). The store is
/// pure data access: every business rule (pairing, conflict checks, the
/// empty-result convention) lives in the engine on top of these primitives.
pub trait EdgeStore {
    /// Error type for store operations
    type Error;

    /// Insert a single directed edge.
    fn insert_edge(&mut self, edge: Edge) -> Result<(), Self::Error>;

    /// Insert both directed `Friend` edges for a friendship atomically.
    ///
    /// Either both edges `(a, b)` and `(b, a)` are persisted or neither is;
    /// a half-written friendship must never be observable.
    fn insert_friendship(
        &mut self,
        a: &Identifier,
        b: &Identifier,
        now: i64,
    ) -> Result<(), Self::Error>;

    /// All edges between the unordered pair `{a, b}`, both directions.
    fn edges_between(&self, a: &Identifier, b: &Identifier) -> Result<Vec<Edge>, Self::Error>;

    /// All users with a mutual friendship with `user`.
    ///
    /// Only pairs where both directed `Friend` edges exist qualify; a lone
    /// edge in either direction is a partial friendship and is excluded.
    /// Ordering is unspecified.
    fn friends_of(&self, user: &Identifier) -> Result<Vec<Identifier>, Self::Error>;

    /// Remove every edge. Used by test fixtures to reset state.
    fn delete_all_edges(&mut self) -> Result<(), Self::Error>;

    /// Whether an error from [`EdgeStore::insert_friendship`] means the
    /// friendship already exists (a uniqueness conflict from a racing
    /// insert), as opposed to an I/O failure.
    fn is_conflict(err: &Self::Error) -> bool {
        let _ = err;
        false
    }
}
