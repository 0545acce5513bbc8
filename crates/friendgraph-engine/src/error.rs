//! Engine error types

use thiserror::Error;

/// Errors returned by relationship-engine operations
///
/// Three families share this enum: input-validation errors (safe to retry
/// after correction, detected before any write), business-rule conflicts
/// (expected outcomes of valid requests, surfaced verbatim), and store
/// failures (propagated without retry).
#[derive(Error, Debug)]
pub enum EngineError {
    /// Wrong number of users supplied to a pair operation
    #[error("incorrect number of users: expected {expected}, got {got}")]
    InvalidArgumentCount {
        /// How many users the operation needs
        expected: usize,
        /// How many were supplied
        got: usize,
    },

    /// An identifier failed email validation
    #[error("invalid email address: {0}")]
    InvalidIdentifier(String),

    /// A required argument was empty
    #[error("no {0} was provided")]
    MissingArgument(&'static str),

    /// Friendship with oneself is not allowed
    #[error("cannot be friends with oneself")]
    SelfFriendship,

    /// Subscribing to oneself is not allowed (only when configured)
    #[error("cannot subscribe to oneself")]
    SelfSubscription,

    /// A block edge exists between the pair, in either direction
    #[error("{blocker} has blocked {blocked}")]
    Blocked {
        /// The user who placed the block
        blocker: String,
        /// The user the block points at
        blocked: String,
    },

    /// A friendship between the pair already exists
    #[error("{requestor} is already a friend of {target}")]
    AlreadyFriends {
        /// One side of the existing friendship
        requestor: String,
        /// The other side
        target: String,
    },

    /// The user has no friends at all
    #[error("user {0} doesn't have any friends")]
    NoFriends(String),

    /// The two users have no friends in common
    #[error("{0} and {1} don't have any common friends")]
    NoCommonFriends(String, String),

    /// Store error during an operation
    #[error("Store error: {0}")]
    Store(String),
}
