//! Fixed vocabularies for the non-platform record fields.
//!
//! Every enum serializes as its kebab-case code (the persisted form) and
//! parses case-insensitively from that code via `FromStr`.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Error returned when a string is not a known code for a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub value: String,
}

fn parse_code<T: Copy>(
    kind: &'static str,
    all: &[T],
    code: impl Fn(&T) -> &'static str,
    input: &str,
) -> Result<T, UnknownCode> {
    let lower = input.trim().to_lowercase();
    all.iter()
        .copied()
        .find(|v| code(v) == lower)
        .ok_or_else(|| UnknownCode {
            kind,
            value: input.to_string(),
        })
}

// ── Genre ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Action,
    Adventure,
    Rpg,
    Shooter,
    Strategy,
    Sports,
    Racing,
    Puzzle,
    Platformer,
    Simulation,
    Fighting,
    Horror,
    Other,
}

const ALL_GENRES: &[Genre] = &[
    Genre::Action,
    Genre::Adventure,
    Genre::Rpg,
    Genre::Shooter,
    Genre::Strategy,
    Genre::Sports,
    Genre::Racing,
    Genre::Puzzle,
    Genre::Platformer,
    Genre::Simulation,
    Genre::Fighting,
    Genre::Horror,
    Genre::Other,
];

impl Genre {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Adventure => "adventure",
            Self::Rpg => "rpg",
            Self::Shooter => "shooter",
            Self::Strategy => "strategy",
            Self::Sports => "sports",
            Self::Racing => "racing",
            Self::Puzzle => "puzzle",
            Self::Platformer => "platformer",
            Self::Simulation => "simulation",
            Self::Fighting => "fighting",
            Self::Horror => "horror",
            Self::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rpg => "RPG",
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Shooter => "Shooter",
            Self::Strategy => "Strategy",
            Self::Sports => "Sports",
            Self::Racing => "Racing",
            Self::Puzzle => "Puzzle",
            Self::Platformer => "Platformer",
            Self::Simulation => "Simulation",
            Self::Fighting => "Fighting",
            Self::Horror => "Horror",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [Genre] {
        ALL_GENRES
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Genre {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code("genre", ALL_GENRES, Genre::code, s)
    }
}

// ── Edition ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edition {
    Standard,
    Collector,
    Deluxe,
    Ultimate,
    Other,
}

const ALL_EDITIONS: &[Edition] = &[
    Edition::Standard,
    Edition::Collector,
    Edition::Deluxe,
    Edition::Ultimate,
    Edition::Other,
];

impl Default for Edition {
    fn default() -> Self {
        defaults::EDITION
    }
}

impl Edition {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Collector => "collector",
            Self::Deluxe => "deluxe",
            Self::Ultimate => "ultimate",
            Self::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Edition",
            Self::Collector => "Collector's Edition",
            Self::Deluxe => "Deluxe Edition",
            Self::Ultimate => "Ultimate Edition",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [Edition] {
        ALL_EDITIONS
    }
}

impl std::fmt::Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Edition {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code("edition", ALL_EDITIONS, Edition::code, s)
    }
}

// ── Condition ───────────────────────────────────────────────────────────────

/// Physical condition of a boxed copy. Digital copies carry one too but it
/// is never shown (see `GameRecord::effective_condition`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    UsedGood,
    UsedFair,
    UsedPoor,
}

const ALL_CONDITIONS: &[Condition] = &[
    Condition::New,
    Condition::UsedGood,
    Condition::UsedFair,
    Condition::UsedPoor,
];

impl Default for Condition {
    fn default() -> Self {
        defaults::CONDITION
    }
}

impl Condition {
    pub fn code(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::UsedGood => "used-good",
            Self::UsedFair => "used-fair",
            Self::UsedPoor => "used-poor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::UsedGood => "Used - Good",
            Self::UsedFair => "Used - Fair",
            Self::UsedPoor => "Used - Poor",
        }
    }

    pub fn all() -> &'static [Condition] {
        ALL_CONDITIONS
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Condition {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code("condition", ALL_CONDITIONS, Condition::code, s)
    }
}

// ── Format ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Physical,
    Digital,
}

impl Format {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Digital => "digital",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Digital => "Digital",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Format {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code("format", &[Self::Physical, Self::Digital], Format::code, s)
    }
}

// ── Ownership ───────────────────────────────────────────────────────────────

/// Whether a record is owned or wished-for. Decides which collection of the
/// record store holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    #[default]
    Owned,
    Wishlist,
}

impl Ownership {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Owned => "owned",
            Self::Wishlist => "wishlist",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Owned => "Owned",
            Self::Wishlist => "Wishlist",
        }
    }
}

impl std::fmt::Display for Ownership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Ownership {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code("ownership", &[Self::Owned, Self::Wishlist], Ownership::code, s)
    }
}

#[cfg(test)]
#[path = "tests/vocab_tests.rs"]
mod tests;
