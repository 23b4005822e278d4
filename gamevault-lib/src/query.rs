//! Filter, sort, and paginate a collection for display.
//!
//! Everything here is a pure function over a slice of records; results
//! borrow from the input.

use std::cmp::Ordering;
use std::collections::HashSet;

use gamevault_core::{GameRecord, Genre, Platform, UnknownCode};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Records per page in the collection view.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Sort order for the owned collection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Newest first
    #[default]
    DateAdded,
    /// A to Z
    Title,
    /// Newest release first, unknown year last
    ReleaseYear,
    /// Most expensive first
    Price,
    /// Highest rated first
    Rating,
}

const ALL_SORTS: &[SortBy] = &[
    SortBy::DateAdded,
    SortBy::Title,
    SortBy::ReleaseYear,
    SortBy::Price,
    SortBy::Rating,
];

impl SortBy {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DateAdded => "date-added",
            Self::Title => "title",
            Self::ReleaseYear => "release-year",
            Self::Price => "price",
            Self::Rating => "rating",
        }
    }

    pub fn all() -> &'static [SortBy] {
        ALL_SORTS
    }
}

impl std::str::FromStr for SortBy {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_SORTS
            .iter()
            .copied()
            .find(|sort| sort.code() == lower)
            .ok_or_else(|| UnknownCode {
                kind: "sort order",
                value: s.to_string(),
            })
    }
}

/// Search, platform, genre, and sort criteria for [`query`].
///
/// An empty search string or an empty set means "no restriction".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against title or genre code
    pub search: String,
    pub platforms: HashSet<Platform>,
    pub genres: HashSet<Genre>,
    pub sort_by: SortBy,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms = platforms.into_iter().collect();
        self
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = Genre>) -> Self {
        self.genres = genres.into_iter().collect();
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// True when no filter would exclude anything.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.platforms.is_empty() && self.genres.is_empty()
    }

    fn matches(&self, record: &GameRecord, needle: &str) -> bool {
        if !needle.is_empty() {
            let in_title = record.title.to_lowercase().contains(needle);
            let in_genre = record.genre.is_some_and(|g| g.code().contains(needle));
            if !in_title && !in_genre {
                return false;
            }
        }
        if !self.platforms.is_empty() && !self.platforms.contains(&record.platform) {
            return false;
        }
        if !self.genres.is_empty() && !record.genre.is_some_and(|g| self.genres.contains(&g)) {
            return false;
        }
        true
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage<'a> {
    pub records: Vec<&'a GameRecord>,
    /// Effective 1-based page after clamping
    pub page: usize,
    /// Always at least 1, even with no matches
    pub total_pages: usize,
    /// Matches across all pages
    pub total_matches: usize,
}

/// Apply the filters in `spec` and sort the survivors. Sorting is stable.
pub fn filter_and_sort<'a>(records: &'a [GameRecord], spec: &FilterSpec) -> Vec<&'a GameRecord> {
    let needle = spec.search.trim().to_lowercase();
    let mut matched: Vec<&GameRecord> = records
        .iter()
        .filter(|record| spec.matches(record, &needle))
        .collect();
    sort_records(&mut matched, spec.sort_by);
    matched
}

/// Filter, sort, and return page `page` (1-based) of `page_size` records.
///
/// Out-of-range pages clamp: page 0 reads as page 1 and anything past the
/// end reads as the last page. A `page_size` of 0 is treated as 1.
pub fn query<'a>(
    records: &'a [GameRecord],
    spec: &FilterSpec,
    page: usize,
    page_size: usize,
) -> QueryPage<'a> {
    let page_size = page_size.max(1);
    let matched = filter_and_sort(records, spec);
    let total_matches = matched.len();
    let total_pages = total_pages(total_matches, page_size);
    let page = page.clamp(1, total_pages);

    let records = matched
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    QueryPage {
        records,
        page,
        total_pages,
        total_matches,
    }
}

/// `ceil(count / page_size)`, minimum 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

fn sort_records(records: &mut [&GameRecord], sort_by: SortBy) {
    match sort_by {
        SortBy::Title => records.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortBy::ReleaseYear => {
            records.sort_by(|a, b| b.release_year.unwrap_or(0).cmp(&a.release_year.unwrap_or(0)))
        }
        SortBy::Price => records.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Rating => records.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortBy::DateAdded => records.sort_by(|a, b| b.added_date.cmp(&a.added_date)),
    }
}

/// Compares base letters first ("Ōkami" sorts with the O titles), then
/// case-folded text, then the raw strings so that "zelda" and "Zelda" still
/// order deterministically.
fn compare_titles(a: &str, b: &str) -> Ordering {
    title_key(a)
        .cmp(&title_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Lowercase with accents stripped: decompose, then drop combining marks.
fn title_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

// ── Wishlist ────────────────────────────────────────────────────────────────

/// Sort order for the wishlist view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WishlistSort {
    #[default]
    DateAdded,
    Title,
    /// Rating doubles as priority on the wishlist
    Priority,
    Price,
}

const ALL_WISHLIST_SORTS: &[WishlistSort] = &[
    WishlistSort::DateAdded,
    WishlistSort::Title,
    WishlistSort::Priority,
    WishlistSort::Price,
];

impl WishlistSort {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DateAdded => "date-added",
            Self::Title => "title",
            Self::Priority => "priority",
            Self::Price => "price",
        }
    }

    pub fn all() -> &'static [WishlistSort] {
        ALL_WISHLIST_SORTS
    }
}

impl std::str::FromStr for WishlistSort {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_WISHLIST_SORTS
            .iter()
            .copied()
            .find(|sort| sort.code() == lower)
            .ok_or_else(|| UnknownCode {
                kind: "wishlist sort order",
                value: s.to_string(),
            })
    }
}

/// The whole wishlist in the requested order. No filtering or pagination.
pub fn sort_wishlist(records: &[GameRecord], sort: WishlistSort) -> Vec<&GameRecord> {
    let mut sorted: Vec<&GameRecord> = records.iter().collect();
    let sort_by = match sort {
        WishlistSort::DateAdded => SortBy::DateAdded,
        WishlistSort::Title => SortBy::Title,
        WishlistSort::Priority => SortBy::Rating,
        WishlistSort::Price => SortBy::Price,
    };
    sort_records(&mut sorted, sort_by);
    sorted
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
