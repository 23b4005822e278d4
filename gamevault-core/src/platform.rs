use serde::{Deserialize, Serialize};

/// Platform/storefront identifiers a collection entry can belong to.
///
/// This enum centralizes platform identity (persisted code, display name,
/// aliases, and default cover art) in one place so the rest of the
/// workspace never matches on raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Playstation,
    Xbox,
    Switch,

    // PC storefronts
    PcSteam,
    PcEpic,
    PcGog,
    PcOther,

    Other,
}

/// All platform variants in registration order.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::Playstation,
    Platform::Xbox,
    Platform::Switch,
    Platform::PcSteam,
    Platform::PcEpic,
    Platform::PcGog,
    Platform::PcOther,
    Platform::Other,
];

const COVER_PLAYSTATION: &str = "https://images.unsplash.com/photo-1593305841991-05c297ba4575?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";
const COVER_XBOX: &str = "https://images.unsplash.com/photo-1606144042614-b2417e99c4e3?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";
const COVER_SWITCH: &str = "https://images.unsplash.com/photo-1578303512597-81e6cc155b3e?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";
const COVER_OTHER: &str = "https://images.unsplash.com/photo-1550745165-9bc0b252726f?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";

impl Platform {
    /// Canonical code used in persisted data, CLI arguments, and exports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Playstation => "playstation",
            Self::Xbox => "xbox",
            Self::Switch => "switch",
            Self::PcSteam => "pc-steam",
            Self::PcEpic => "pc-epic",
            Self::PcGog => "pc-gog",
            Self::PcOther => "pc-other",
            Self::Other => "other",
        }
    }

    /// Human-readable platform name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Playstation => "PlayStation",
            Self::Xbox => "Xbox",
            Self::Switch => "Nintendo Switch",
            Self::PcSteam => "PC (Steam)",
            Self::PcEpic => "PC (Epic Games)",
            Self::PcGog => "PC (GOG)",
            Self::PcOther => "PC (Other)",
            Self::Other => "Other",
        }
    }

    /// True for the PC storefront variants.
    pub fn is_pc(&self) -> bool {
        matches!(
            self,
            Self::PcSteam | Self::PcEpic | Self::PcGog | Self::PcOther
        )
    }

    /// All accepted names for this platform (case-insensitive matching).
    ///
    /// The canonical code always comes first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Playstation => &["playstation", "ps", "psn", "ps4", "ps5"],
            Self::Xbox => &["xbox", "xbox one", "xbox series", "xsx"],
            Self::Switch => &["switch", "nintendo switch", "ns", "nsw"],
            Self::PcSteam => &["pc-steam", "steam"],
            Self::PcEpic => &["pc-epic", "epic", "epic games"],
            Self::PcGog => &["pc-gog", "gog"],
            Self::PcOther => &["pc-other", "pc"],
            Self::Other => &["other"],
        }
    }

    /// Cover art shown when a record has no cover image of its own.
    ///
    /// Storefronts without dedicated art share the generic cover.
    pub fn default_cover(&self) -> &'static str {
        match self {
            Self::Playstation | Self::PcSteam => COVER_PLAYSTATION,
            Self::Xbox => COVER_XBOX,
            Self::Switch => COVER_SWITCH,
            Self::PcEpic | Self::PcGog | Self::PcOther | Self::Other => COVER_OTHER,
        }
    }

    /// All platform variants.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from its code or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|platform| platform.aliases().iter().any(|alias| *alias == lower))
            .ok_or_else(|| PlatformParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
