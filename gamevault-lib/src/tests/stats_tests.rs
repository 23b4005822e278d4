use super::*;
use chrono::{Duration, TimeZone, Utc};
use gamevault_core::{GameRecordInput, Ownership};

fn record(id: u64, minutes: i64, input: GameRecordInput) -> GameRecord {
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    GameRecord::from_input(id, base + Duration::minutes(minutes), input).unwrap()
}

#[test]
fn empty_collection() {
    let stats = summarize(&[], &[]);
    assert_eq!(stats.total_owned, 0);
    assert_eq!(stats.wishlist_count, 0);
    assert_eq!(stats.collection_value, 0.0);
    assert_eq!(stats.top_platform, None);
    assert_eq!(stats.top_platform_label(), "N/A");
    assert!(stats.recent_games.is_empty());
    assert!(stats.platform_counts.is_empty());
    assert!(stats.genre_counts.is_empty());
}

#[test]
fn counts_value_and_top_platform() {
    let owned = vec![
        record(1, 0, GameRecordInput::new("A", Platform::Xbox).with_price(10.0)),
        record(2, 1, GameRecordInput::new("B", Platform::Switch).with_price(20.5)),
        record(3, 2, GameRecordInput::new("C", Platform::Switch).with_price(5.0)),
    ];
    let wishlist = vec![record(
        4,
        3,
        GameRecordInput::new("D", Platform::Xbox).with_ownership(Ownership::Wishlist),
    )];

    let stats = summarize(&owned, &wishlist);
    assert_eq!(stats.total_owned, 3);
    assert_eq!(stats.wishlist_count, 1);
    assert!((stats.collection_value - 35.5).abs() < 1e-9);
    assert_eq!(stats.top_platform, Some(Platform::Switch));
    assert_eq!(stats.top_platform_label(), "Nintendo Switch");
}

#[test]
fn top_platform_tie_goes_to_first_encountered() {
    let owned = vec![
        record(1, 0, GameRecordInput::new("A", Platform::PcGog)),
        record(2, 1, GameRecordInput::new("B", Platform::Playstation)),
        record(3, 2, GameRecordInput::new("C", Platform::Playstation)),
        record(4, 3, GameRecordInput::new("D", Platform::PcGog)),
    ];
    let stats = summarize(&owned, &[]);
    assert_eq!(stats.top_platform, Some(Platform::PcGog));
    assert_eq!(
        stats.platform_counts,
        vec![(Platform::PcGog, 2), (Platform::Playstation, 2)]
    );
}

#[test]
fn recent_games_are_three_newest() {
    let owned: Vec<GameRecord> = [30, 10, 50, 20, 40]
        .iter()
        .enumerate()
        .map(|(i, &m)| {
            record(
                i as u64,
                m,
                GameRecordInput::new(format!("G{m}"), Platform::Other),
            )
        })
        .collect();
    let stats = summarize(&owned, &[]);
    let titles: Vec<&str> = stats.recent_games.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["G50", "G40", "G30"]);
}

#[test]
fn recent_games_ties_keep_collection_order() {
    let owned = vec![
        record(1, 0, GameRecordInput::new("first", Platform::Other)),
        record(2, 0, GameRecordInput::new("second", Platform::Other)),
        record(3, 0, GameRecordInput::new("third", Platform::Other)),
        record(4, 0, GameRecordInput::new("fourth", Platform::Other)),
    ];
    let ids: Vec<u64> = recent_games(&owned, RECENT_GAMES)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn genre_counts_skip_missing_genres() {
    let owned = vec![
        record(1, 0, GameRecordInput::new("A", Platform::Other).with_genre(Genre::Rpg)),
        record(2, 1, GameRecordInput::new("B", Platform::Other)),
        record(3, 2, GameRecordInput::new("C", Platform::Other).with_genre(Genre::Action)),
        record(4, 3, GameRecordInput::new("D", Platform::Other).with_genre(Genre::Rpg)),
    ];
    let stats = summarize(&owned, &[]);
    assert_eq!(stats.genre_counts, vec![(Genre::Rpg, 2), (Genre::Action, 1)]);
}
