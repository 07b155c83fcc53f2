//! End-to-end flows across the directory, likes, matches and conversations.

use std::sync::Arc;
use std::thread;

use frnds_store::{Store, StoreError};
use frnds_types::{Profile, User};
use uuid::Uuid;

fn register(store: &Store, handle: &str, secret: &str) -> User {
    store.register(handle, secret, Profile::default()).unwrap()
}

#[test]
fn mutual_like_creates_one_match_and_messages_flow() {
    let store = Store::new();
    let lina = register(&store, "lina", "secretA");
    let milan = register(&store, "milan", "secretB");

    let first = store.like(lina.id, milan.id).unwrap();
    assert!(!first.mutual);
    assert!(first.matched.is_none());
    assert!(store.matches_for(lina.id).unwrap().is_empty());

    let second = store.like(milan.id, lina.id).unwrap();
    assert!(second.mutual);
    let m = second.matched.expect("mutual like should match");
    assert_eq!(store.stats().unwrap().matches, 1);

    let for_lina = store.matches_for(lina.id).unwrap();
    let for_milan = store.matches_for(milan.id).unwrap();
    assert_eq!(for_lina.len(), 1);
    assert_eq!(for_milan.len(), 1);
    assert_eq!(for_lina[0].match_id, m.id);
    assert_eq!(for_milan[0].match_id, m.id);
    assert_eq!(for_lina[0].user.username, "milan");
    assert_eq!(for_milan[0].user.username, "lina");

    store
        .send_message(m.id, lina.id, milan.id, "Hoi Milan!")
        .unwrap();
    let messages = store.messages_for(m.id).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message, "Hoi Milan!");
    assert_eq!(messages[0].from_user_id, lina.id);
    assert_eq!(messages[0].to_user_id, milan.id);
}

#[test]
fn first_message_creates_match_with_one_message() {
    let store = Store::new();
    let milan = register(&store, "milan", "secretB");
    let sofia = register(&store, "sofia", "secretC");

    let message = store
        .first_message(milan.id, sofia.id, "Hey Sofia")
        .unwrap();

    let matches = store.matches_for(sofia.id).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].match_id, message.match_id);
    assert_eq!(matches[0].user.id, milan.id);
    assert_eq!(store.messages_for(message.match_id).unwrap().len(), 1);
}

#[test]
fn like_path_and_first_message_path_converge() {
    let store = Store::new();
    let lina = register(&store, "lina", "a");
    let milan = register(&store, "milan", "b");

    store.like(lina.id, milan.id).unwrap();
    let via_like = store.like(milan.id, lina.id).unwrap().matched.unwrap();
    let via_message = store.first_message(lina.id, milan.id, "hi").unwrap();
    let via_reverse = store.first_message(milan.id, lina.id, "hey").unwrap();
    let direct = store.ensure_match(milan.id, lina.id).unwrap();

    assert_eq!(via_message.match_id, via_like.id);
    assert_eq!(via_reverse.match_id, via_like.id);
    assert_eq!(direct, via_like);
    assert_eq!(store.stats().unwrap().matches, 1);
    assert_eq!(store.messages_for(via_like.id).unwrap().len(), 2);
}

#[test]
fn first_message_then_mutual_like_reuses_match() {
    let store = Store::new();
    let milan = register(&store, "milan", "b");
    let sofia = register(&store, "sofia", "c");

    let opened = store.first_message(milan.id, sofia.id, "hi").unwrap();
    store.like(sofia.id, milan.id).unwrap();
    let matched = store.like(milan.id, sofia.id).unwrap().matched.unwrap();

    assert_eq!(matched.id, opened.match_id);
    assert_eq!(store.stats().unwrap().matches, 1);
}

#[test]
fn duplicate_registration_conflicts() {
    let store = Store::new();
    register(&store, "lina", "secretA");

    let err = store
        .register("lina", "another", Profile::default())
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));
    assert_eq!(store.stats().unwrap().users, 1);
    assert!(store.authenticate("lina", "secretA").is_ok());
    assert_eq!(
        store.authenticate("lina", "another"),
        Err(StoreError::Unauthorized)
    );
}

#[test]
fn failed_actions_leave_state_untouched() {
    let store = Store::new();
    let lina = register(&store, "lina", "a");
    let milan = register(&store, "milan", "b");
    let ghost = Uuid::new_v4();

    assert!(matches!(
        store.first_message(lina.id, ghost, "hi"),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.first_message(lina.id, milan.id, ""),
        Err(StoreError::InvalidInput(_))
    ));
    // Empty text is reported ahead of an unknown user.
    assert!(matches!(
        store.first_message(ghost, milan.id, ""),
        Err(StoreError::InvalidInput(_))
    ));
    assert!(matches!(
        store.first_message(lina.id, lina.id, "hi"),
        Err(StoreError::InvalidInput(_))
    ));
    assert!(matches!(
        store.send_message(Uuid::new_v4(), lina.id, milan.id, "hi"),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(store.like(ghost, lina.id), Err(StoreError::NotFound(_))));

    assert_eq!(store.stats().unwrap().matches, 0);
    let counts = store
        .with_state(|s| Ok((s.affinity.len(), s.conversations.len())))
        .unwrap();
    assert_eq!(counts, (0, 0));
}

#[test]
fn reads_never_expose_credentials() {
    let store = Store::new();
    let lina = register(&store, "lina", "secretA");
    let milan = register(&store, "milan", "secretB");
    store.first_message(lina.id, milan.id, "hi").unwrap();

    let mut payloads = vec![
        serde_json::to_string(&store.list_others(lina.id).unwrap()).unwrap(),
        serde_json::to_string(&store.matches_for(lina.id).unwrap()).unwrap(),
        serde_json::to_string(&store.matches_for(milan.id).unwrap()).unwrap(),
        serde_json::to_string(&store.authenticate("lina", "secretA").unwrap()).unwrap(),
    ];
    payloads.push(serde_json::to_string(&store.user(milan.id).unwrap()).unwrap());

    for payload in payloads {
        assert!(!payload.contains("secretA"), "leaked: {}", payload);
        assert!(!payload.contains("secretB"), "leaked: {}", payload);
        assert!(!payload.contains("password"), "leaked: {}", payload);
    }
}

#[test]
fn concurrent_ensure_match_yields_one_match() {
    let store = Arc::new(Store::new());
    let a = register(&store, "lina", "a").id;
    let b = register(&store, "milan", "b").id;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                if i % 2 == 0 {
                    store.ensure_match(a, b).unwrap().id
                } else {
                    store.first_message(b, a, "hi").unwrap().match_id
                }
            })
        })
        .collect();

    let ids: Vec<Uuid> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(ids.iter().all(|id| *id == ids[0]));
    assert_eq!(store.stats().unwrap().matches, 1);
}
