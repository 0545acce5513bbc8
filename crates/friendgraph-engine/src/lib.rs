//! Friendgraph Engine
//!
//! The business-rule layer of the relationship graph. Decides whether a
//! friendship may be formed, computes friends and common-friends lists, and
//! records blocks and subscriptions, all by composing EdgeStore operations.
//!
//! The engine provides:
//! - Friendship creation with pairing and conflict checks
//! - Friends-list and common-friends queries (mutual edges only)
//! - Block and subscription recording
//! - The empty-result-as-error convention, behind a config knob
//!
//! # Examples
//!
//! ```no_run
//! use friendgraph_engine::{EngineConfig, RelationshipEngine};
//! use friendgraph_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! let mut engine = RelationshipEngine::new(store, EngineConfig::default());
//!
//! engine.create_friendship("andy@example.com", "john@example.com").unwrap();
//! let friends = engine.list_friends("andy@example.com").unwrap();
//! assert_eq!(friends.len(), 1);
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;

pub use config::EngineConfig;
pub use engine::RelationshipEngine;
pub use error::EngineError;
