//! Data model for the GameVault collection tracker.
//!
//! Defines the game record, the input used to create or replace one, and
//! the fixed vocabularies (platform, genre, edition, condition, format,
//! ownership). This crate does no I/O; `gamevault-lib` owns storage,
//! querying, and statistics.

pub mod error;
pub mod platform;
pub mod record;
mod serde_util;
pub mod vocab;

pub use error::ValidationError;
pub use platform::{Platform, PlatformParseError};
pub use record::{GameRecord, GameRecordInput, RecordId};
pub use serde_util::parse_timestamp;
pub use vocab::{Condition, Edition, Format, Genre, Ownership, UnknownCode};

/// Field defaults applied when a `GameRecordInput` leaves a field unset.
///
/// | Field        | Default    |
/// |--------------|------------|
/// | price        | 0          |
/// | edition      | standard   |
/// | condition    | new        |
/// | rating       | 0          |
/// | release year, genre, purchase date, cover image | absent |
pub mod defaults {
    use crate::vocab::{Condition, Edition};

    pub const PRICE: f64 = 0.0;
    pub const EDITION: Edition = Edition::Standard;
    pub const CONDITION: Condition = Condition::New;
    pub const RATING: u8 = 0;

    /// Highest star rating a record can carry.
    pub const MAX_RATING: u8 = 5;
}
