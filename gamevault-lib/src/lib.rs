//! Storage, querying, and statistics for the GameVault collection tracker.
//!
//! [`RecordStore`] owns the owned and wishlist collections and saves them
//! through a [`BlobStore`]. The query, stats, and export modules are pure
//! functions over record slices and can be used without a store.

pub mod clock;
pub mod error;
pub mod export;
pub mod persistence;
pub mod query;
pub mod sample;
pub mod settings;
pub mod stats;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use error::{ExportError, PersistenceError, VaultError};
pub use export::{ExportRow, export_file_name, export_rows, write_csv};
pub use persistence::{BlobStore, CollectionKey, FileBlobStore, MemoryBlobStore};
pub use query::{FilterSpec, QueryPage, SortBy, WishlistSort, query, sort_wishlist};
pub use stats::{Stats, summarize};
pub use store::{RecordStore, WriteOutcome};
