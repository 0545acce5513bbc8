//! End-to-end scenarios for the relationship engine over the SQLite store.
//!
//! Results of friends queries are treated as sets: no ordering is
//! guaranteed, so lists are sorted before comparison.

use friendgraph_domain::EdgeStore;
use friendgraph_engine::{EngineConfig, EngineError, RelationshipEngine};
use friendgraph_store::SqliteStore;

fn engine() -> RelationshipEngine<SqliteStore> {
    RelationshipEngine::with_defaults(SqliteStore::new(":memory:").unwrap())
}

fn sorted(mut list: Vec<friendgraph_domain::Identifier>) -> Vec<String> {
    list.sort();
    list.into_iter().map(|id| id.into_string()).collect()
}

#[test]
fn test_friendship_is_visible_from_both_sides() {
    let mut engine = engine();
    engine
        .create_friendship("andy@example.com", "john@example.com")
        .unwrap();

    assert_eq!(
        sorted(engine.list_friends("andy@example.com").unwrap()),
        vec!["john@example.com"]
    );
    assert_eq!(
        sorted(engine.list_friends("john@example.com").unwrap()),
        vec!["andy@example.com"]
    );
}

#[test]
fn test_second_create_fails_with_already_friends() {
    let mut engine = engine();
    let users = ["andy@example.com", "john@example.com"];

    engine.create_friendship_pair(&users).unwrap();
    let err = engine.create_friendship_pair(&users).unwrap_err();
    assert!(matches!(err, EngineError::AlreadyFriends { .. }));
}

#[test]
fn test_self_friendship_always_fails() {
    let mut engine = engine();
    let err = engine
        .create_friendship("andy@example.com", "andy@example.com")
        .unwrap_err();
    assert!(matches!(err, EngineError::SelfFriendship));
}

#[test]
fn test_blocked_precedence_over_creation() {
    let mut engine = engine();

    // Block in one direction only; creation must fail both ways
    engine
        .block("john@example.com", "andy@example.com")
        .unwrap();

    let err = engine
        .create_friendship("andy@example.com", "john@example.com")
        .unwrap_err();
    assert!(matches!(err, EngineError::Blocked { .. }));

    let err = engine
        .create_friendship("john@example.com", "andy@example.com")
        .unwrap_err();
    assert!(matches!(err, EngineError::Blocked { .. }));
}

#[test]
fn test_friends_list_scenario() {
    let mut engine = engine();

    for (a, b) in [
        ("andy@example.com", "john@example.com"),
        ("andy@example.com", "lisa@example.com"),
        ("john@example.com", "kate@example.com"),
    ] {
        engine.create_friendship(a, b).unwrap();
    }

    assert_eq!(
        sorted(engine.list_friends("andy@example.com").unwrap()),
        vec!["john@example.com", "lisa@example.com"]
    );
    assert_eq!(
        sorted(engine.list_friends("john@example.com").unwrap()),
        vec!["andy@example.com", "kate@example.com"]
    );
    assert_eq!(
        sorted(engine.list_friends("lisa@example.com").unwrap()),
        vec!["andy@example.com"]
    );

    let err = engine.list_friends("unknown@example.com").unwrap_err();
    match err {
        EngineError::NoFriends(user) => assert_eq!(user, "unknown@example.com"),
        other => panic!("expected NoFriends, got {:?}", other),
    }
}

#[test]
fn test_common_friends_scenario() {
    let mut engine = engine();

    let pairs = [
        ("andy@example.com", "john@example.com"),
        ("andy@example.com", "common@example.com"),
        ("andy@example.com", "lisa@example.com"),
        ("andy@example.com", "sean@example.com"),
        ("john@example.com", "andy@example.com"), // duplicate, rejected
        ("john@example.com", "common@example.com"),
        ("john@example.com", "lisa@example.com"),
        ("lisa@example.com", "sean@example.com"),
    ];
    for (a, b) in pairs {
        // The duplicate pair is rejected without disturbing the rest
        let _ = engine.create_friendship(a, b);
    }

    let common = engine
        .common_friends(&["andy@example.com", "john@example.com"])
        .unwrap();
    assert_eq!(common.len(), 2);
    assert_eq!(
        sorted(common),
        vec!["common@example.com", "lisa@example.com"]
    );

    let common = engine
        .common_friends(&["andy@example.com", "sean@example.com"])
        .unwrap();
    assert_eq!(common.len(), 1);
    assert_eq!(sorted(common), vec!["lisa@example.com"]);

    let common = engine
        .common_friends(&["lisa@example.com", "sean@example.com"])
        .unwrap();
    assert_eq!(common.len(), 1);
    assert_eq!(sorted(common), vec!["andy@example.com"]);
}

#[test]
fn test_common_friends_is_commutative() {
    let mut engine = engine();

    for (a, b) in [
        ("andy@example.com", "common@example.com"),
        ("john@example.com", "common@example.com"),
        ("andy@example.com", "lisa@example.com"),
        ("john@example.com", "lisa@example.com"),
    ] {
        engine.create_friendship(a, b).unwrap();
    }

    let forward = engine
        .common_friends(&["andy@example.com", "john@example.com"])
        .unwrap();
    let backward = engine
        .common_friends(&["john@example.com", "andy@example.com"])
        .unwrap();
    assert_eq!(sorted(forward), sorted(backward));
}

#[test]
fn test_no_common_friends_without_overlap() {
    let mut engine = engine();

    engine
        .create_friendship("andy@example.com", "lisa@example.com")
        .unwrap();
    engine
        .create_friendship("john@example.com", "kate@example.com")
        .unwrap();

    let err = engine
        .common_friends(&["andy@example.com", "john@example.com"])
        .unwrap_err();
    assert!(matches!(err, EngineError::NoCommonFriends(_, _)));
}

#[test]
fn test_permissive_engine_returns_empty_lists() {
    let store = SqliteStore::new(":memory:").unwrap();
    let engine = RelationshipEngine::new(store, EngineConfig::permissive());

    assert!(engine.list_friends("andy@example.com").unwrap().is_empty());
    assert!(engine
        .common_friends(&["andy@example.com", "john@example.com"])
        .unwrap()
        .is_empty());
}

#[test]
fn test_reset_clears_all_state_between_scenarios() {
    let mut engine = engine();

    engine
        .create_friendship("andy@example.com", "john@example.com")
        .unwrap();
    engine
        .subscribe("lisa@example.com", "andy@example.com")
        .unwrap();
    engine
        .block("kate@example.com", "andy@example.com")
        .unwrap();

    engine.store_mut().delete_all_edges().unwrap();

    let err = engine.list_friends("andy@example.com").unwrap_err();
    assert!(matches!(err, EngineError::NoFriends(_)));

    // After the reset, the previously blocked pair may become friends
    engine
        .create_friendship("andy@example.com", "kate@example.com")
        .unwrap();
}
