//! Flat export rows and CSV serialization.

use std::io::Write;

use chrono::NaiveDate;
use gamevault_core::{Condition, Edition, Format, GameRecord, Genre, Ownership, Platform};
use serde::Serialize;

use crate::error::ExportError;

/// One exported record. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Platform")]
    pub platform: Platform,
    #[serde(rename = "Release Year")]
    pub release_year: Option<i32>,
    #[serde(rename = "Genre")]
    pub genre: Option<Genre>,
    #[serde(rename = "Purchase Date")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Format")]
    pub format: Format,
    #[serde(rename = "Ownership")]
    pub ownership: Ownership,
    #[serde(rename = "Edition")]
    pub edition: Edition,
    #[serde(rename = "Condition")]
    pub condition: Condition,
    #[serde(rename = "Rating")]
    pub rating: u8,
}

impl From<&GameRecord> for ExportRow {
    fn from(record: &GameRecord) -> Self {
        Self {
            title: record.title.clone(),
            platform: record.platform,
            release_year: record.release_year,
            genre: record.genre,
            purchase_date: record.purchase_date,
            price: record.price,
            format: record.format,
            ownership: record.ownership,
            edition: record.edition,
            condition: record.condition,
            rating: record.rating,
        }
    }
}

/// Owned records followed by wishlist records, each in collection order.
pub fn export_rows(owned: &[GameRecord], wishlist: &[GameRecord]) -> Vec<ExportRow> {
    owned.iter().chain(wishlist).map(ExportRow::from).collect()
}

/// Write `rows` as CSV with a header line.
///
/// An empty export is refused rather than producing a header-only file.
pub fn write_csv<W: Write>(rows: &[ExportRow], writer: W) -> Result<(), ExportError> {
    if rows.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Default export file name, e.g. `gamevault-export-2024-05-01.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("gamevault-export-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
