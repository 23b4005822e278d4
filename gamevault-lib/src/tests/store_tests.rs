use super::*;
use chrono::{DateTime, TimeZone, Utc};
use gamevault_core::{Format, Genre, Platform, ValidationError};

use crate::persistence::MemoryBlobStore;

/// Always returns the same instant.
struct FrozenClock(DateTime<Utc>);

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn frozen() -> Box<dyn Clock> {
    Box::new(FrozenClock(
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    ))
}

fn empty_store() -> RecordStore {
    RecordStore::open_with_clock(Box::new(MemoryBlobStore::new()), frozen())
}

fn saved(store: &RecordStore, key: CollectionKey) -> Vec<GameRecord> {
    persistence::load_collection(store.blobs.as_ref(), key)
}

fn wish(title: &str, platform: Platform) -> GameRecordInput {
    GameRecordInput::new(title, platform).with_ownership(Ownership::Wishlist)
}

/// A persisted entry written without going through validation.
fn raw_entry(id: u64, title: &str, price: f64, rating: u32) -> String {
    format!(
        r#"{{"id":{id},"title":"{title}","platform":"xbox","price":{price},"rating":{rating},"format":"physical","ownership":"owned","addedDate":"2024-01-01T00:00:00Z"}}"#
    )
}

fn reopen(store: RecordStore) -> RecordStore {
    RecordStore::open_with_clock(store.blobs, frozen())
}

#[test]
fn add_places_record_by_ownership_and_persists() {
    let mut store = empty_store();
    let owned_id = store
        .add(GameRecordInput::new("Hades", Platform::PcSteam).with_price(24.99))
        .unwrap()
        .into_value();
    let wish_id = store
        .add(wish("Hollow Knight: Silksong", Platform::Switch))
        .unwrap()
        .into_value();

    assert_eq!(store.owned().len(), 1);
    assert_eq!(store.wishlist().len(), 1);
    assert_eq!(store.owned()[0].id, owned_id);
    assert_eq!(store.wishlist()[0].id, wish_id);
    assert_eq!(saved(&store, CollectionKey::Games), store.owned());
    assert_eq!(saved(&store, CollectionKey::Wishlist), store.wishlist());
}

#[test]
fn add_applies_defaults_and_timestamp() {
    let mut store = empty_store();
    let id = store
        .add(GameRecordInput::new("  Tetris  ", Platform::Other))
        .unwrap()
        .into_value();
    let record = store.get(id).unwrap();
    assert_eq!(record.title, "Tetris");
    assert_eq!(record.price, 0.0);
    assert_eq!(record.rating, 0);
    assert_eq!(
        record.added_date,
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(id, record.added_date.timestamp_millis() as u64);
}

#[test]
fn add_rejects_invalid_input_without_changes() {
    let mut store = empty_store();
    let err = store
        .add(GameRecordInput::new("   ", Platform::Xbox))
        .unwrap_err();
    assert!(matches!(err, VaultError::Validation(ValidationError::EmptyTitle)));

    let err = store
        .add(GameRecordInput::new("X", Platform::Xbox).with_rating(6))
        .unwrap_err();
    assert!(matches!(
        err,
        VaultError::Validation(ValidationError::RatingOutOfRange { value: 6, .. })
    ));

    let err = store
        .add(GameRecordInput {
            title: "No platform".into(),
            ..GameRecordInput::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        VaultError::Validation(ValidationError::MissingPlatform)
    ));

    assert!(store.is_empty());
}

#[test]
fn ids_stay_unique_and_increasing_with_frozen_clock() {
    let mut store = empty_store();
    let mut last = 0;
    for i in 0..1000 {
        let id = store
            .add(GameRecordInput::new(format!("Game {i}"), Platform::Other))
            .unwrap()
            .into_value();
        assert!(id > last, "id {id} did not increase past {last}");
        last = id;
    }
    assert_eq!(store.len(), 1000);
}

#[test]
fn ids_continue_past_loaded_records() {
    let far_future = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();
    let existing = GameRecord::from_input(
        far_future.timestamp_millis() as u64,
        far_future,
        GameRecordInput::new("From the future", Platform::Xbox),
    )
    .unwrap();
    let mut blobs = MemoryBlobStore::new();
    persistence::save_collection(&mut blobs, CollectionKey::Games, &[existing.clone()])
        .unwrap();

    let mut store = RecordStore::open_with_clock(Box::new(blobs), frozen());
    let id = store
        .add(GameRecordInput::new("Now", Platform::Xbox))
        .unwrap()
        .into_value();
    assert_eq!(id, existing.id + 1);
}

#[test]
fn update_in_place_preserves_id_date_and_position() {
    let mut store = empty_store();
    let first = store
        .add(GameRecordInput::new("First", Platform::Xbox))
        .unwrap()
        .into_value();
    let second = store
        .add(GameRecordInput::new("Second", Platform::Xbox))
        .unwrap()
        .into_value();
    let added = store.get(first).unwrap().added_date;

    let input = GameRecordInput::new("First (GOTY)", Platform::Playstation)
        .with_genre(Genre::Action)
        .with_format(Format::Digital);
    assert!(store.update(first, input).unwrap().is_saved());

    let record = store.get(first).unwrap();
    assert_eq!(record.title, "First (GOTY)");
    assert_eq!(record.platform, Platform::Playstation);
    assert_eq!(record.added_date, added);
    let ids: Vec<_> = store.owned().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(saved(&store, CollectionKey::Games), store.owned());
}

#[test]
fn update_moves_record_between_collections() {
    let mut store = empty_store();
    let id = store
        .add(wish("Elden Ring", Platform::PcSteam))
        .unwrap()
        .into_value();
    let other = store
        .add(GameRecordInput::new("Owned already", Platform::PcSteam))
        .unwrap()
        .into_value();

    // Bought it
    let input = store
        .get(id)
        .unwrap()
        .to_input()
        .with_ownership(Ownership::Owned)
        .with_price(59.99);
    store.update(id, input).unwrap();

    assert!(store.wishlist().is_empty());
    let ids: Vec<_> = store.owned().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![other, id], "moved record goes to the end");
    assert_eq!(store.get(id).unwrap().ownership, Ownership::Owned);
    assert!(saved(&store, CollectionKey::Wishlist).is_empty());
    assert_eq!(saved(&store, CollectionKey::Games).len(), 2);

    // And back again
    let input = store
        .get(id)
        .unwrap()
        .to_input()
        .with_ownership(Ownership::Wishlist);
    store.update(id, input).unwrap();
    assert_eq!(store.owned().len(), 1);
    assert_eq!(store.wishlist()[0].id, id);
}

#[test]
fn failed_move_keeps_record_saved_in_its_old_collection() {
    let when = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let record = GameRecord::from_input(
        5,
        when,
        GameRecordInput::new("Chrono Trigger", Platform::Switch).with_price(20.0),
    )
    .unwrap();
    let mut blobs = MemoryBlobStore::new();
    persistence::save_collection(&mut blobs, CollectionKey::Games, &[record]).unwrap();
    let full = blobs.used_bytes();
    let blobs = blobs.with_quota(full);

    let mut store = RecordStore::open_with_clock(Box::new(blobs), frozen());
    let input = store
        .get(5)
        .unwrap()
        .to_input()
        .with_ownership(Ownership::Wishlist);
    let outcome = store.update(5, input).unwrap();

    match outcome.save_error {
        Some(PersistenceError::QuotaExceeded { ref key, .. }) => assert_eq!(key, "wishlist"),
        ref other => panic!("expected a wishlist quota error, got {other:?}"),
    }
    assert_eq!(store.get(5).unwrap().ownership, Ownership::Wishlist);
    assert_eq!(saved(&store, CollectionKey::Games).len(), 1);

    let store = reopen(store);
    let record = store.get(5).expect("record survives the failed move");
    assert_eq!(record.ownership, Ownership::Owned);
    assert_eq!(record.title, "Chrono Trigger");
}

#[test]
fn move_saves_both_collections_for_reopen() {
    let mut store = empty_store();
    let id = store
        .add(wish("Metroid Dread", Platform::Switch))
        .unwrap()
        .into_value();
    let input = store
        .get(id)
        .unwrap()
        .to_input()
        .with_ownership(Ownership::Owned);
    assert!(store.update(id, input).unwrap().is_saved());

    let store = reopen(store);
    assert!(store.wishlist().is_empty());
    assert_eq!(store.owned()[0].id, id);
}

#[test]
fn add_fails_cleanly_when_ids_run_out() {
    let blobs = MemoryBlobStore::new().with_entry(
        "games",
        format!("[{}]", raw_entry(u64::MAX, "Last", 1.0, 1)),
    );
    let mut store = RecordStore::open_with_clock(Box::new(blobs), frozen());
    assert_eq!(store.len(), 1);

    let err = store
        .add(GameRecordInput::new("One more", Platform::Xbox))
        .unwrap_err();
    assert!(matches!(err, VaultError::IdsExhausted(u64::MAX)));
    assert_eq!(store.len(), 1);
    assert_eq!(saved(&store, CollectionKey::Games).len(), 1);
}

#[test]
fn update_unknown_id_is_not_found() {
    let mut store = empty_store();
    let err = store
        .update(42, GameRecordInput::new("X", Platform::Xbox))
        .unwrap_err();
    assert!(matches!(err, VaultError::NotFound(42)));
}

#[test]
fn update_with_invalid_input_changes_nothing() {
    let mut store = empty_store();
    let id = store
        .add(GameRecordInput::new("Keep me", Platform::Xbox))
        .unwrap()
        .into_value();
    let before = store.get(id).unwrap().clone();

    let bad = GameRecordInput::new("", Platform::Switch).with_ownership(Ownership::Wishlist);
    assert!(store.update(id, bad).is_err());
    assert_eq!(store.get(id), Some(&before));
    assert!(store.wishlist().is_empty());
}

#[test]
fn remove_then_get_returns_none() {
    let mut store = empty_store();
    let id = store
        .add(wish("Gone soon", Platform::Switch))
        .unwrap()
        .into_value();
    let removed = store.remove(id).unwrap().into_value();
    assert_eq!(removed.title, "Gone soon");
    assert_eq!(store.get(id), None);
    assert!(saved(&store, CollectionKey::Wishlist).is_empty());

    assert!(matches!(store.remove(id), Err(VaultError::NotFound(_))));
}

#[test]
fn failed_save_keeps_in_memory_change() {
    let blobs = MemoryBlobStore::new().with_quota(16);
    let mut store = RecordStore::open_with_clock(Box::new(blobs), frozen());

    let outcome = store
        .add(GameRecordInput::new("Too big to save", Platform::Xbox))
        .unwrap();
    assert!(!outcome.is_saved());
    assert!(matches!(
        outcome.save_error,
        Some(PersistenceError::QuotaExceeded { .. })
    ));
    assert!(store.get(outcome.value).is_some());
    assert!(saved(&store, CollectionKey::Games).is_empty());
}

#[test]
fn open_normalizes_ownership_and_drops_duplicates() {
    let when = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let misfiled = GameRecord::from_input(
        7,
        when,
        GameRecordInput::new("Misfiled", Platform::Xbox).with_ownership(Ownership::Owned),
    )
    .unwrap();
    let owned = GameRecord::from_input(7, when, GameRecordInput::new("Dup", Platform::Xbox))
        .unwrap();

    let mut blobs = MemoryBlobStore::new();
    persistence::save_collection(&mut blobs, CollectionKey::Games, &[owned]).unwrap();
    persistence::save_collection(&mut blobs, CollectionKey::Wishlist, &[misfiled.clone()])
        .unwrap();
    let mut with_misfile = MemoryBlobStore::new();
    persistence::save_collection(&mut with_misfile, CollectionKey::Wishlist, &[misfiled])
        .unwrap();

    let store = RecordStore::open_with_clock(Box::new(blobs), frozen());
    assert_eq!(store.len(), 1, "duplicate id is dropped");
    assert_eq!(store.owned()[0].title, "Dup");

    let store = RecordStore::open_with_clock(Box::new(with_misfile), frozen());
    assert_eq!(store.wishlist()[0].ownership, Ownership::Wishlist);
}

#[test]
fn open_drops_invalid_records_and_keeps_a_copy() {
    let blob = format!(
        "[{},{},{},{}]",
        raw_entry(1, "Halo", 10.0, 4),
        raw_entry(2, "Too many stars", 10.0, 9),
        raw_entry(3, "Refund", -5.0, 3),
        raw_entry(4, "", 10.0, 3),
    );
    let blobs = MemoryBlobStore::new().with_entry("games", blob.clone());
    let store = RecordStore::open_with_clock(Box::new(blobs), frozen());

    let ids: Vec<_> = store.owned().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(
        store.blobs.get("games.corrupt").unwrap().as_deref(),
        Some(blob.as_str())
    );
}

#[test]
fn corrupt_blob_opens_empty_and_keeps_a_copy() {
    let blobs = MemoryBlobStore::new()
        .with_entry("games", "{not json")
        .with_entry("wishlist", "[]");
    let store = RecordStore::open_with_clock(Box::new(blobs), frozen());
    assert!(store.is_empty());
    assert_eq!(
        store.blobs.get("games.corrupt").unwrap().as_deref(),
        Some("{not json")
    );
    assert!(store.blobs.get("wishlist.corrupt").unwrap().is_none());
}

#[test]
fn unreadable_saved_data_is_never_replaced_by_samples() {
    let user_blob = r#"[{"id":1,"title":"Mine","platform":"ps9","format":"physical","ownership":"owned","addedDate":"2024-01-01"}]"#;
    let blobs = MemoryBlobStore::new().with_entry("games", user_blob);
    let mut store = RecordStore::open_with_clock(Box::new(blobs), frozen());
    assert!(store.is_empty());

    let when = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let sample =
        vec![GameRecord::from_input(9, when, GameRecordInput::new("A", Platform::Xbox)).unwrap()];
    assert!(store.seed_if_empty(sample).is_none());
    assert!(store.is_empty());
    assert_eq!(
        store.blobs.get("games").unwrap().as_deref(),
        Some(user_blob)
    );
}

#[test]
fn emptied_collections_are_not_reseeded() {
    let blobs = MemoryBlobStore::new()
        .with_entry("games", "[]")
        .with_entry("wishlist", "[]");
    let mut store = RecordStore::open_with_clock(Box::new(blobs), frozen());

    let when = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let sample =
        vec![GameRecord::from_input(9, when, GameRecordInput::new("A", Platform::Xbox)).unwrap()];
    assert!(store.seed_if_empty(sample).is_none());
    assert!(store.is_empty());
}

#[test]
fn seed_only_when_empty() {
    let when = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let sample = vec![
        GameRecord::from_input(1, when, GameRecordInput::new("A", Platform::Xbox)).unwrap(),
        GameRecord::from_input(2, when, wish("B", Platform::Switch)).unwrap(),
    ];

    let mut store = empty_store();
    let outcome = store.seed_if_empty(sample.clone()).unwrap();
    assert_eq!(outcome.value, 2);
    assert_eq!(store.owned().len(), 1);
    assert_eq!(store.wishlist().len(), 1);
    assert_eq!(saved(&store, CollectionKey::Wishlist), store.wishlist());

    assert!(store.seed_if_empty(sample).is_none());
    assert_eq!(store.len(), 2);
}

#[test]
fn all_selects_collection() {
    let mut store = empty_store();
    store
        .add(GameRecordInput::new("Mine", Platform::Xbox))
        .unwrap();
    store.add(wish("Wanted", Platform::Xbox)).unwrap();
    assert_eq!(store.all(Ownership::Owned)[0].title, "Mine");
    assert_eq!(store.all(Ownership::Wishlist)[0].title, "Wanted");
}
