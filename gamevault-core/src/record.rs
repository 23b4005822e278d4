//! The game record entity and the input used to create or replace one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::ValidationError;
use crate::platform::Platform;
use crate::serde_util::{empty_as_default, empty_as_none, flexible_timestamp, null_as_default};
use crate::vocab::{Condition, Edition, Format, Genre, Ownership};

/// Record identifier: the creation time in epoch milliseconds, bumped when
/// needed to stay unique.
pub type RecordId = u64;

/// One game in the collection, owned or wished-for.
///
/// Serialized field names (camelCase) are the persisted blob format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: RecordId,
    pub title: String,
    pub platform: Platform,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub genre: Option<Genre>,
    /// Absent for games never purchased (typically wishlist items)
    #[serde(default, deserialize_with = "empty_as_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    pub format: Format,
    pub ownership: Ownership,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub edition: Edition,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub condition: Condition,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: u8,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cover_image: Option<String>,
    #[serde(deserialize_with = "flexible_timestamp")]
    pub added_date: DateTime<Utc>,
}

impl GameRecord {
    /// Build a record from validated input, applying the field defaults.
    ///
    /// `id` and `added_date` are supplied by the caller so a full-field
    /// update can carry them over from the record it replaces.
    pub fn from_input(
        id: RecordId,
        added_date: DateTime<Utc>,
        input: GameRecordInput,
    ) -> Result<Self, ValidationError> {
        input.validate()?;
        let platform = input.platform.ok_or(ValidationError::MissingPlatform)?;

        Ok(Self {
            id,
            title: input.title.trim().to_string(),
            platform,
            release_year: input.release_year,
            genre: input.genre,
            purchase_date: input.purchase_date,
            price: input.price.unwrap_or(defaults::PRICE),
            format: input.format,
            ownership: input.ownership,
            edition: input.edition.unwrap_or(defaults::EDITION),
            condition: input.condition.unwrap_or(defaults::CONDITION),
            rating: input.rating.unwrap_or(defaults::RATING),
            cover_image: input
                .cover_image
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            added_date,
        })
    }

    /// Cover image URL, falling back to the platform's default art.
    pub fn cover_url(&self) -> &str {
        self.cover_image
            .as_deref()
            .unwrap_or_else(|| self.platform.default_cover())
    }

    /// Condition only means something for physical copies.
    pub fn effective_condition(&self) -> Option<Condition> {
        match self.format {
            Format::Physical => Some(self.condition),
            Format::Digital => None,
        }
    }

    pub fn is_owned(&self) -> bool {
        self.ownership == Ownership::Owned
    }

    /// The full-field input that reproduces this record, e.g. to pre-fill
    /// an edit form.
    pub fn to_input(&self) -> GameRecordInput {
        GameRecordInput {
            title: self.title.clone(),
            platform: Some(self.platform),
            release_year: self.release_year,
            genre: self.genre,
            purchase_date: self.purchase_date,
            price: Some(self.price),
            format: self.format,
            ownership: self.ownership,
            edition: Some(self.edition),
            condition: Some(self.condition),
            rating: Some(self.rating),
            cover_image: self.cover_image.clone(),
        }
    }
}

/// Every mutable field of a record, as entered by the user.
///
/// `None` means "use the default" for the fields listed in
/// [`defaults`](crate::defaults); `platform` has no default and must be set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameRecordInput {
    pub title: String,
    pub platform: Option<Platform>,
    pub release_year: Option<i32>,
    pub genre: Option<Genre>,
    pub purchase_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub format: Format,
    pub ownership: Ownership,
    pub edition: Option<Edition>,
    pub condition: Option<Condition>,
    pub rating: Option<u8>,
    pub cover_image: Option<String>,
}

impl GameRecordInput {
    pub fn new(title: impl Into<String>, platform: Platform) -> Self {
        Self {
            title: title.into(),
            platform: Some(platform),
            ..Self::default()
        }
    }

    pub fn with_ownership(mut self, ownership: Ownership) -> Self {
        self.ownership = ownership;
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date);
        self
    }

    pub fn with_edition(mut self, edition: Edition) -> Self {
        self.edition = Some(edition);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_cover_image(mut self, url: impl Into<String>) -> Self {
        self.cover_image = Some(url.into());
        self
    }

    /// Check the constraints a record must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.platform.is_none() {
            return Err(ValidationError::MissingPlatform);
        }
        if let Some(rating) = self.rating.filter(|r| *r > defaults::MAX_RATING) {
            return Err(ValidationError::RatingOutOfRange {
                value: rating,
                max: defaults::MAX_RATING,
            });
        }
        if let Some(price) = self.price.filter(|p| !p.is_finite() || *p < 0.0) {
            return Err(ValidationError::InvalidPrice(price));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
