//! The record store: owned and wishlist collections behind one API.
//!
//! The store is the only owner of the two collections. Every write keeps a
//! record's `ownership` field and its containing collection in agreement,
//! and every successful mutation saves the affected collection(s) through
//! the blob store. Save failures are best-effort: the in-memory change
//! stands and the error is handed back in [`WriteOutcome::save_error`].

use std::collections::HashSet;

use gamevault_core::{GameRecord, GameRecordInput, Ownership, RecordId};

use crate::clock::{Clock, SystemClock};
use crate::error::{PersistenceError, VaultError};
use crate::export::{self, ExportRow};
use crate::persistence::{self, BlobStore, CollectionKey};
use crate::stats::{self, Stats};

/// Result of a mutation that was applied in memory.
#[derive(Debug)]
pub struct WriteOutcome<T> {
    pub value: T,
    /// Set when saving the change failed. The change is still in effect for
    /// this session.
    pub save_error: Option<PersistenceError>,
}

impl<T> WriteOutcome<T> {
    fn new(value: T, save_error: Option<PersistenceError>) -> Self {
        Self { value, save_error }
    }

    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

pub struct RecordStore {
    owned: Vec<GameRecord>,
    wishlist: Vec<GameRecord>,
    blobs: Box<dyn BlobStore>,
    clock: Box<dyn Clock>,
    /// Highest id handed out or loaded so far
    last_id: RecordId,
    /// Either key held a blob at open, readable or not
    has_saved_data: bool,
}

impl RecordStore {
    /// Load both collections from `blobs`, using the system clock.
    pub fn open(blobs: Box<dyn BlobStore>) -> Self {
        Self::open_with_clock(blobs, Box::new(SystemClock))
    }

    /// Load both collections from `blobs`.
    ///
    /// Missing or corrupt collections start empty, and records that fail
    /// validation are dropped. Either way the blob is first copied to its
    /// [`persistence::backup_key`]. Records found under the wrong key have
    /// their `ownership` corrected to match, and a duplicate id keeps only
    /// its first occurrence.
    pub fn open_with_clock(mut blobs: Box<dyn BlobStore>, clock: Box<dyn Clock>) -> Self {
        let mut seen = HashSet::new();
        let (owned, games_saved) = load_key(blobs.as_mut(), CollectionKey::Games, &mut seen);
        let (wishlist, wishlist_saved) =
            load_key(blobs.as_mut(), CollectionKey::Wishlist, &mut seen);
        let last_id = seen.into_iter().max().unwrap_or(0);

        log::debug!(
            "Loaded {} owned and {} wishlist records",
            owned.len(),
            wishlist.len()
        );

        Self {
            owned,
            wishlist,
            blobs,
            clock,
            last_id,
            has_saved_data: games_saved || wishlist_saved,
        }
    }

    /// Create a record from `input` and append it to the collection its
    /// ownership selects. Returns the new id.
    pub fn add(&mut self, input: GameRecordInput) -> Result<WriteOutcome<RecordId>, VaultError> {
        let now = self.clock.now();
        let id = self.next_id(now.timestamp_millis())?;
        let record = GameRecord::from_input(id, now, input)?;
        let ownership = record.ownership;

        log::debug!("Adding {} '{}' to {}", id, record.title, ownership);
        self.collection_mut(ownership).push(record);
        self.last_id = id;

        let save_error = self.persist(&[CollectionKey::for_ownership(ownership)]);
        Ok(WriteOutcome::new(id, save_error))
    }

    /// Replace every mutable field of record `id` with `input`.
    ///
    /// When the ownership changes, the record moves to the end of the other
    /// collection. Nothing is modified if the id is unknown or the input is
    /// invalid.
    pub fn update(
        &mut self,
        id: RecordId,
        input: GameRecordInput,
    ) -> Result<WriteOutcome<()>, VaultError> {
        let (from, index) = self.locate(id).ok_or(VaultError::NotFound(id))?;
        let current = &self.collection(from)[index];
        let updated = GameRecord::from_input(current.id, current.added_date, input)?;
        let to = updated.ownership;

        let save_error = if from == to {
            self.collection_mut(from)[index] = updated;
            self.persist(&[CollectionKey::for_ownership(from)])
        } else {
            log::debug!("Moving {} from {} to {}", id, from, to);
            self.collection_mut(from).remove(index);
            self.collection_mut(to).push(updated);
            // Destination first; the source keeps its copy if that write fails
            self.persist(&[CollectionKey::for_ownership(to)])
                .or_else(|| self.persist(&[CollectionKey::for_ownership(from)]))
        };
        Ok(WriteOutcome::new((), save_error))
    }

    /// Delete record `id` from whichever collection holds it.
    pub fn remove(&mut self, id: RecordId) -> Result<WriteOutcome<GameRecord>, VaultError> {
        let (from, index) = self.locate(id).ok_or(VaultError::NotFound(id))?;
        let removed = self.collection_mut(from).remove(index);
        log::debug!("Removed {} '{}' from {}", id, removed.title, from);

        let save_error = self.persist(&[CollectionKey::for_ownership(from)]);
        Ok(WriteOutcome::new(removed, save_error))
    }

    pub fn get(&self, id: RecordId) -> Option<&GameRecord> {
        self.locate(id)
            .map(|(ownership, index)| &self.collection(ownership)[index])
    }

    /// Records of one collection in insertion order.
    pub fn all(&self, which: Ownership) -> &[GameRecord] {
        self.collection(which)
    }

    pub fn owned(&self) -> &[GameRecord] {
        &self.owned
    }

    pub fn wishlist(&self) -> &[GameRecord] {
        &self.wishlist
    }

    /// Total records across both collections.
    pub fn len(&self) -> usize {
        self.owned.len() + self.wishlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty() && self.wishlist.is_empty()
    }

    /// Install `records` on first run: both collections are empty and
    /// neither key held a blob when the store was opened.
    ///
    /// Returns `None` and changes nothing otherwise, so saved data that
    /// failed to load is never overwritten by samples. Records are split by
    /// their `ownership`; duplicate ids are dropped.
    pub fn seed_if_empty(&mut self, records: Vec<GameRecord>) -> Option<WriteOutcome<usize>> {
        if self.has_saved_data || !self.is_empty() {
            return None;
        }
        let mut seen = HashSet::new();
        for record in records {
            if !seen.insert(record.id) {
                continue;
            }
            let ownership = record.ownership;
            self.collection_mut(ownership).push(record);
        }
        self.last_id = self.last_id.max(seen.iter().copied().max().unwrap_or(0));

        log::debug!("Seeded {} sample records", self.len());
        let save_error = self.persist(&[CollectionKey::Games, CollectionKey::Wishlist]);
        Some(WriteOutcome::new(self.len(), save_error))
    }

    /// Dashboard statistics for the current collections.
    pub fn summarize(&self) -> Stats {
        stats::summarize(&self.owned, &self.wishlist)
    }

    /// Flat rows for export, owned first.
    pub fn export_rows(&self) -> Vec<ExportRow> {
        export::export_rows(&self.owned, &self.wishlist)
    }

    /// Ids follow the clock in milliseconds but never repeat or go
    /// backwards.
    fn next_id(&self, now_millis: i64) -> Result<RecordId, VaultError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or(VaultError::IdsExhausted(self.last_id))?;
        let now = RecordId::try_from(now_millis).unwrap_or(0);
        Ok(now.max(next))
    }

    fn locate(&self, id: RecordId) -> Option<(Ownership, usize)> {
        [Ownership::Owned, Ownership::Wishlist]
            .into_iter()
            .find_map(|which| {
                self.collection(which)
                    .iter()
                    .position(|r| r.id == id)
                    .map(|index| (which, index))
            })
    }

    fn collection(&self, which: Ownership) -> &Vec<GameRecord> {
        match which {
            Ownership::Owned => &self.owned,
            Ownership::Wishlist => &self.wishlist,
        }
    }

    fn collection_mut(&mut self, which: Ownership) -> &mut Vec<GameRecord> {
        match which {
            Ownership::Owned => &mut self.owned,
            Ownership::Wishlist => &mut self.wishlist,
        }
    }

    /// Save each key, returning the first failure.
    fn persist(&mut self, keys: &[CollectionKey]) -> Option<PersistenceError> {
        let mut first_error = None;
        for &key in keys {
            let records = match key {
                CollectionKey::Games => &self.owned,
                CollectionKey::Wishlist => &self.wishlist,
            };
            if let Err(e) = persistence::save_collection(self.blobs.as_mut(), key, records) {
                log::warn!("Could not save {key}; changes are kept for this session: {e}");
                first_error.get_or_insert(e);
            }
        }
        first_error
    }
}

/// Load one key for `open`. The flag is set when the key held a blob.
fn load_key(
    blobs: &mut dyn BlobStore,
    key: CollectionKey,
    seen: &mut HashSet<RecordId>,
) -> (Vec<GameRecord>, bool) {
    let (records, damaged) = match persistence::read_collection(blobs, key) {
        Ok(None) => return (Vec::new(), false),
        Ok(Some(loaded)) => {
            let total = loaded.len();
            let valid: Vec<_> = loaded.into_iter().filter(is_valid).collect();
            let damaged = valid.len() < total;
            (normalize(valid, key.ownership(), seen), damaged)
        }
        Err(e) => {
            log::warn!("Could not load saved {key}, starting with an empty list: {e}");
            let damaged = matches!(e, PersistenceError::Corrupt { .. });
            (Vec::new(), damaged)
        }
    };

    if damaged {
        match persistence::back_up(blobs, key) {
            Ok(_) => log::warn!(
                "The previous {key} data was kept as '{}'",
                persistence::backup_key(key)
            ),
            Err(e) => log::warn!("Could not back up saved {key}: {e}"),
        }
    }
    (records, true)
}

fn is_valid(record: &GameRecord) -> bool {
    match record.to_input().validate() {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Dropping invalid record {}: {e}", record.id);
            false
        }
    }
}

fn normalize(
    records: Vec<GameRecord>,
    ownership: Ownership,
    seen: &mut HashSet<RecordId>,
) -> Vec<GameRecord> {
    records
        .into_iter()
        .filter_map(|mut record| {
            if !seen.insert(record.id) {
                log::warn!("Dropping duplicate record id {}", record.id);
                return None;
            }
            if record.ownership != ownership {
                log::debug!(
                    "Record {} stored under {} had ownership {}",
                    record.id,
                    CollectionKey::for_ownership(ownership),
                    record.ownership
                );
                record.ownership = ownership;
            }
            Some(record)
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
