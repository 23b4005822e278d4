use thiserror::Error;

/// Reasons a `GameRecordInput` is rejected before it reaches a collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Title is empty or whitespace only
    #[error("Please enter a game title")]
    EmptyTitle,

    /// No platform was selected
    #[error("Please select a platform")]
    MissingPlatform,

    /// Rating outside the 0-5 star range
    #[error("Rating must be between 0 and {max}, got {value}")]
    RatingOutOfRange { value: u8, max: u8 },

    /// Negative, NaN, or infinite price
    #[error("Price must be a non-negative amount, got {0}")]
    InvalidPrice(f64),
}
