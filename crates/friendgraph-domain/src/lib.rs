//! Friendgraph Domain Layer
//!
//! This crate contains the core domain model for the friendgraph relationship
//! service. It has ZERO external dependencies and defines the fundamental
//! concepts, value objects, and trait interfaces that all other layers depend
//! upon.
//!
//! ## Key Concepts
//!
//! - **Identifier**: a syntactically valid email address naming a user
//! - **Edge**: one directed relationship record between two users
//! - **Friendship**: a *pair* of opposite-direction `Friend` edges - the two
//!   edges must be created together, and a lone edge is never a friendship
//! - **Block**: a one-directional edge that vetoes friendship creation
//! - **Subscription**: a one-directional edge recording interest in updates
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure business types only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edge;
pub mod identifier;
pub mod traits;

// Re-exports for convenience
pub use edge::{Edge, EdgeStatus};
pub use identifier::{is_valid_email, Identifier};
pub use traits::EdgeStore;
