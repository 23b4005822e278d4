//! Dashboard statistics over the owned and wishlist collections.

use gamevault_core::{GameRecord, Genre, Platform};

/// Number of entries in [`Stats::recent_games`].
pub const RECENT_GAMES: usize = 3;

/// Label shown when there is no top platform.
pub const NO_TOP_PLATFORM: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total_owned: usize,
    pub wishlist_count: usize,
    /// Sum of `price` over owned records
    pub collection_value: f64,
    /// Most common platform among owned records; ties go to the platform
    /// encountered first. `None` when nothing is owned.
    pub top_platform: Option<Platform>,
    /// Up to three most recently added owned records, newest first
    pub recent_games: Vec<GameRecord>,
    /// Owned records per platform, in first-encountered order
    pub platform_counts: Vec<(Platform, usize)>,
    /// Owned records per genre, in first-encountered order. Records without
    /// a genre are not counted.
    pub genre_counts: Vec<(Genre, usize)>,
}

impl Stats {
    /// Display name of the top platform, or "N/A".
    pub fn top_platform_label(&self) -> &'static str {
        self.top_platform
            .map_or(NO_TOP_PLATFORM, |p| p.display_name())
    }
}

/// Compute dashboard statistics.
pub fn summarize(owned: &[GameRecord], wishlist: &[GameRecord]) -> Stats {
    let platform_counts = count_by(owned, |r| Some(r.platform));
    let genre_counts = count_by(owned, |r| r.genre);

    // Strictly greater, so the first platform to reach the max wins
    let mut top_platform = None;
    let mut max_count = 0;
    for &(platform, count) in &platform_counts {
        if count > max_count {
            max_count = count;
            top_platform = Some(platform);
        }
    }

    Stats {
        total_owned: owned.len(),
        wishlist_count: wishlist.len(),
        collection_value: owned.iter().map(|r| r.price).sum(),
        top_platform,
        recent_games: recent_games(owned, RECENT_GAMES),
        platform_counts,
        genre_counts,
    }
}

/// The `n` most recently added records, newest first. Records added at the
/// same instant keep their collection order.
pub fn recent_games(records: &[GameRecord], n: usize) -> Vec<GameRecord> {
    let mut sorted: Vec<&GameRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.added_date.cmp(&a.added_date));
    sorted.into_iter().take(n).cloned().collect()
}

/// Count records per key, keeping keys in first-encountered order.
/// Records for which `key` returns `None` are skipped.
pub fn count_by<K, F>(records: &[GameRecord], key: F) -> Vec<(K, usize)>
where
    K: PartialEq + Copy,
    F: Fn(&GameRecord) -> Option<K>,
{
    let mut counts: Vec<(K, usize)> = Vec::new();
    for k in records.iter().filter_map(&key) {
        match counts.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, count)) => *count += 1,
            None => counts.push((k, 1)),
        }
    }
    counts
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
