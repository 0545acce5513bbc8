//! Relationship business rules
//!
//! All checks run before any write, in a fixed order, and each failure mode
//! is a distinct [`EngineError`] variant. The engine keeps no state of its
//! own between calls: everything lives in the injected store.

use std::collections::HashSet;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use friendgraph_domain::{Edge, EdgeStatus, EdgeStore, Identifier};
use tracing::{debug, info};

use crate::{EngineConfig, EngineError};

/// Number of users involved in a pair operation.
const PAIR: usize = 2;

/// The relationship engine: friendship creation, friends queries, blocks,
/// and subscriptions over an injected [`EdgeStore`].
pub struct RelationshipEngine<S: EdgeStore> {
    store: S,
    config: EngineConfig,
}

impl<S: EdgeStore> RelationshipEngine<S>
where
    S::Error: fmt::Display,
{
    /// Create an engine over the given store and configuration.
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Create an engine with the default configuration.
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, EngineConfig::default())
    }

    /// Access the underlying store, e.g. for test-fixture resets.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Create a friendship from a batched argument list.
    ///
    /// The transport batches the two users as a single list; anything other
    /// than exactly two entries is rejected before looking at the values.
    pub fn create_friendship_pair(&mut self, users: &[&str]) -> Result<(), EngineError> {
        if users.len() != PAIR {
            return Err(EngineError::InvalidArgumentCount {
                expected: PAIR,
                got: users.len(),
            });
        }
        self.create_friendship(users[0], users[1])
    }

    /// Create a mutual friendship between two users.
    ///
    /// Checks run in order: identifier validity, self-friendship, blocks
    /// (either direction), existing friendship. On success both directed
    /// `Friend` edges are written atomically; on any failure nothing is
    /// written.
    pub fn create_friendship(&mut self, requestor: &str, target: &str) -> Result<(), EngineError> {
        let requestor = parse_identifier(requestor)?;
        let target = parse_identifier(target)?;

        if requestor == target {
            return Err(EngineError::SelfFriendship);
        }

        let existing = self
            .store
            .edges_between(&requestor, &target)
            .map_err(store_error)?;

        // A block in either direction vetoes the friendship, and wins over
        // any friend edge that may also be present.
        if let Some(block) = existing.iter().find(|e| e.status == EdgeStatus::Blocked) {
            debug!(blocker = %block.requestor, blocked = %block.target, "friendship vetoed by block");
            return Err(EngineError::Blocked {
                blocker: block.requestor.to_string(),
                blocked: block.target.to_string(),
            });
        }

        if existing.iter().any(|e| e.status == EdgeStatus::Friend) {
            return Err(EngineError::AlreadyFriends {
                requestor: requestor.into_string(),
                target: target.into_string(),
            });
        }

        match self.store.insert_friendship(&requestor, &target, unix_now()) {
            Ok(()) => {
                info!(requestor = %requestor, target = %target, "friendship created");
                Ok(())
            }
            // A racing create can slip past the read check above; the
            // store's uniqueness guarantee turns the loser into a conflict.
            Err(e) if S::is_conflict(&e) => Err(EngineError::AlreadyFriends {
                requestor: requestor.into_string(),
                target: target.into_string(),
            }),
            Err(e) => Err(EngineError::Store(e.to_string())),
        }
    }

    /// List everyone the user has a mutual friendship with.
    ///
    /// Ordering is unspecified; the count is the list's length. With the
    /// default configuration an empty result is the `NoFriends` error.
    pub fn list_friends(&self, user: &str) -> Result<Vec<Identifier>, EngineError> {
        let user = parse_identifier(user)?;

        let friends = self.store.friends_of(&user).map_err(store_error)?;
        debug!(user = %user, count = friends.len(), "friends list computed");

        if friends.is_empty() && self.config.empty_result_is_error {
            return Err(EngineError::NoFriends(user.into_string()));
        }
        Ok(friends)
    }

    /// List the friends two users have in common.
    ///
    /// The intersection of the two friend sets, excluding the two users
    /// themselves even when they are friends with each other. Commutative
    /// in its two inputs.
    pub fn common_friends(&self, users: &[&str]) -> Result<Vec<Identifier>, EngineError> {
        if users.len() != PAIR {
            return Err(EngineError::InvalidArgumentCount {
                expected: PAIR,
                got: users.len(),
            });
        }
        let a = parse_identifier(users[0])?;
        let b = parse_identifier(users[1])?;

        let friends_a = self.store.friends_of(&a).map_err(store_error)?;
        let friends_b: HashSet<Identifier> = self
            .store
            .friends_of(&b)
            .map_err(store_error)?
            .into_iter()
            .collect();

        let common: Vec<Identifier> = friends_a
            .into_iter()
            .filter(|f| friends_b.contains(f) && *f != a && *f != b)
            .collect();
        debug!(a = %a, b = %b, count = common.len(), "common friends computed");

        if common.is_empty() && self.config.empty_result_is_error {
            return Err(EngineError::NoCommonFriends(a.into_string(), b.into_string()));
        }
        Ok(common)
    }

    /// Subscribe the requestor to updates about the target.
    ///
    /// Records one directed `Subscribed` edge. Repeated calls add further
    /// edges; deduplication is not required.
    pub fn subscribe(&mut self, requestor: &str, target: &str) -> Result<(), EngineError> {
        let (requestor, target) = self.parse_pair(requestor, target)?;

        if self.config.forbid_self_subscription && requestor == target {
            return Err(EngineError::SelfSubscription);
        }

        self.insert_directed(requestor, target, EdgeStatus::Subscribed)
    }

    /// Record that the requestor blocks the target.
    ///
    /// One directed `Blocked` edge, no mutual pairing: the target's own
    /// edges toward the requestor are unaffected.
    pub fn block(&mut self, requestor: &str, target: &str) -> Result<(), EngineError> {
        let (requestor, target) = self.parse_pair(requestor, target)?;
        self.insert_directed(requestor, target, EdgeStatus::Blocked)
    }

    fn parse_pair(
        &self,
        requestor: &str,
        target: &str,
    ) -> Result<(Identifier, Identifier), EngineError> {
        if requestor.is_empty() {
            return Err(EngineError::MissingArgument("requestor"));
        }
        if target.is_empty() {
            return Err(EngineError::MissingArgument("target"));
        }
        Ok((parse_identifier(requestor)?, parse_identifier(target)?))
    }

    fn insert_directed(
        &mut self,
        requestor: Identifier,
        target: Identifier,
        status: EdgeStatus,
    ) -> Result<(), EngineError> {
        let edge = Edge::new(requestor.clone(), target.clone(), status, unix_now());
        self.store.insert_edge(edge).map_err(store_error)?;
        info!(requestor = %requestor, target = %target, status = status.as_str(), "edge recorded");
        Ok(())
    }
}

fn parse_identifier(s: &str) -> Result<Identifier, EngineError> {
    Identifier::parse(s).map_err(|_| EngineError::InvalidIdentifier(s.to_string()))
}

fn store_error<E: fmt::Display>(e: E) -> EngineError {
    EngineError::Store(e.to_string())
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
