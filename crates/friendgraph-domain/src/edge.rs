//! Edge module - the single persisted entity of the relationship graph

use crate::Identifier;

/// Status of a directed relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeStatus {
    /// One half of a mutual friendship; only the pair of opposite-direction
    /// `Friend` edges constitutes an actual friendship
    Friend,

    /// The requestor has blocked the target (one-directional)
    Blocked,

    /// The requestor subscribes to updates about the target (one-directional)
    Subscribed,
}

impl EdgeStatus {
    /// The string form persisted by the storage layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeStatus::Friend => "friend",
            EdgeStatus::Blocked => "blocked",
            EdgeStatus::Subscribed => "subscribed",
        }
    }

    /// Parse a persisted status string. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "friend" => Some(EdgeStatus::Friend),
            "blocked" => Some(EdgeStatus::Blocked),
            "subscribed" => Some(EdgeStatus::Subscribed),
            _ => None,
        }
    }
}

/// A directed relationship record between two users.
///
/// `(requestor, target)` is ordered: it is distinct from `(target,
/// requestor)`. Edges are immutable once created; there is no
/// update-in-place of status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// The user the edge points from
    pub requestor: Identifier,

    /// The user the edge points to
    pub target: Identifier,

    /// Kind of relationship this edge records
    pub status: EdgeStatus,

    /// When this edge was created (unix-epoch seconds)
    pub created_at: i64,

    /// When this edge was last touched (unix-epoch seconds)
    pub updated_at: i64,
}

impl Edge {
    /// Create a new edge with both timestamps set to `now`.
    pub fn new(requestor: Identifier, target: Identifier, status: EdgeStatus, now: i64) -> Self {
        Self {
            requestor,
            target,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}
