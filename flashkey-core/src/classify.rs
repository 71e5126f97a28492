//! Code classification: the mapping from a raw code string to displayable
//! content metadata.
//!
//! Classification is a pure, deterministic lookup. The same code always
//! yields the same info, and no input ever produces an error: anything that
//! does not parse into 1..=2736 gets the unknown sentinel.

use crate::catalog::{self, CategoryId, CategoryTheme};

/// Lowest accepted code.
pub const MIN_CODE: u16 = 1;
/// Highest accepted code.
pub const MAX_CODE: u16 = 2736;

/// The five reserved codes 1..=5, each wired to one fixed widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    Video,
    Music,
    Menu,
    Clicker,
    Game,
}

impl Special {
    pub const ALL: [Special; 5] = [
        Special::Video,
        Special::Music,
        Special::Menu,
        Special::Clicker,
        Special::Game,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Music => "music",
            Self::Menu => "menu",
            Self::Clicker => "clicker",
            Self::Game => "game",
        }
    }

    #[must_use]
    const fn title(self) -> &'static str {
        match self {
            Self::Video => "Video Player",
            Self::Music => "Music Player",
            Self::Menu => "Main Menu",
            Self::Clicker => "Clicker Game",
            Self::Game => "Mini-Game",
        }
    }

    #[must_use]
    const fn description(self) -> &'static str {
        match self {
            Self::Video => "Watch video content",
            Self::Music => "Listen to music",
            Self::Menu => "Browse the flash drive",
            Self::Clicker => "A competitive clicking-speed game",
            Self::Game => "A simple catch-the-dot game",
        }
    }
}

/// Where a code landed: a reserved slot, a themed category, or nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeClass {
    Special(Special),
    Category(CategoryId),
    Unknown,
}

/// Metadata synthesized for a code. Derived fresh on every lookup; nothing
/// here is stored or cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub class: CodeClass,
    pub kind: &'static str,
}

/// Sentinel returned for non-numeric or out-of-range input.
pub const UNKNOWN_INFO: CodeInfo = CodeInfo {
    title: "Unknown code",
    description: "This code is not recognized",
    class: CodeClass::Unknown,
    kind: "unknown",
};

/// Parse a code string into an accepted numeric code.
#[must_use]
pub fn parse_code(code: &str) -> Option<u16> {
    let value: u16 = code.trim().parse().ok()?;
    (MIN_CODE..=MAX_CODE).contains(&value).then_some(value)
}

/// Classify a raw code string.
#[must_use]
pub fn classify(code: &str) -> CodeInfo {
    let Some(value) = parse_code(code) else {
        return UNKNOWN_INFO;
    };

    if value <= 5 {
        let slot = Special::ALL[usize::from(value) - 1];
        return CodeInfo {
            title: slot.title(),
            description: slot.description(),
            class: CodeClass::Special(slot),
            kind: slot.as_str(),
        };
    }

    let Some(category) = catalog::category_for(value) else {
        return UNKNOWN_INFO;
    };

    let theme = catalog::theme(category.id);
    let index = usize::from(value - category.start) % CategoryTheme::LEN;
    CodeInfo {
        title: theme.titles[index],
        description: theme.descriptions[index],
        class: CodeClass::Category(category.id),
        kind: theme.subtypes[index],
    }
}
