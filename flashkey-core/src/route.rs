//! Widget routing: which interactive surface a submitted code opens.
//!
//! Routing is intentionally independent of classification. The classifier
//! derives a five-way subtype from a code's range offset; the games range is
//! additionally split three ways by `code % 3` to pick a playable widget.
//! The two selectors are decoupled on purpose and must stay that way.

use crate::catalog::{self, CategoryId};
use crate::classify::parse_code;

/// Every mountable widget variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    VideoPlayer,
    MusicPlayer,
    MainMenu,
    Clicker,
    CatchDot,
    Arcade,
    Puzzle,
    Horror,
    Parallax,
    Decoder,
}

/// Outcome of submitting a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Mount this widget, replacing the interactive surface until closed.
    Open(WidgetKind),
    /// Nothing to mount; surface an unknown-code notice instead.
    Unknown,
}

/// Route a raw code string to a widget.
#[must_use]
pub fn route_code(code: &str) -> Launch {
    let Some(value) = parse_code(code) else {
        return Launch::Unknown;
    };

    // Reserved codes map straight to their widget, bypassing the table.
    if value <= 5 {
        let widget = match value {
            1 => WidgetKind::VideoPlayer,
            2 => WidgetKind::MusicPlayer,
            3 => WidgetKind::MainMenu,
            4 => WidgetKind::Clicker,
            _ => WidgetKind::CatchDot,
        };
        return Launch::Open(widget);
    }

    let Some(category) = catalog::category_for(value) else {
        return Launch::Unknown;
    };

    let widget = match category.id {
        CategoryId::Games => match value % 3 {
            0 => WidgetKind::Arcade,
            1 => WidgetKind::Puzzle,
            _ => WidgetKind::CatchDot,
        },
        CategoryId::Horror => WidgetKind::Horror,
        CategoryId::ThreeD => WidgetKind::Parallax,
        CategoryId::Secret => WidgetKind::Decoder,
        CategoryId::Videos => WidgetKind::VideoPlayer,
        CategoryId::Music => WidgetKind::MusicPlayer,
        // Tools and art have no dedicated widget yet; fall back to arcade.
        CategoryId::Tools | CategoryId::Art => WidgetKind::Arcade,
    };
    Launch::Open(widget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_codes_open_their_fixed_widget() {
        assert_eq!(route_code("1"), Launch::Open(WidgetKind::VideoPlayer));
        assert_eq!(route_code("2"), Launch::Open(WidgetKind::MusicPlayer));
        assert_eq!(route_code("3"), Launch::Open(WidgetKind::MainMenu));
        assert_eq!(route_code("4"), Launch::Open(WidgetKind::Clicker));
        assert_eq!(route_code("5"), Launch::Open(WidgetKind::CatchDot));
    }

    #[test]
    fn games_split_three_ways_by_modulus() {
        // 6 % 3 == 0, 7 % 3 == 1, 8 % 3 == 2.
        assert_eq!(route_code("6"), Launch::Open(WidgetKind::Arcade));
        assert_eq!(route_code("7"), Launch::Open(WidgetKind::Puzzle));
        assert_eq!(route_code("8"), Launch::Open(WidgetKind::CatchDot));
        assert_eq!(route_code("499"), Launch::Open(WidgetKind::Puzzle));
    }

    #[test]
    fn themed_categories_route_to_their_widget() {
        assert_eq!(route_code("600"), Launch::Open(WidgetKind::VideoPlayer));
        assert_eq!(route_code("1000"), Launch::Open(WidgetKind::MusicPlayer));
        assert_eq!(route_code("1300"), Launch::Open(WidgetKind::Horror));
        assert_eq!(route_code("2200"), Launch::Open(WidgetKind::Parallax));
        assert_eq!(route_code("2500"), Launch::Open(WidgetKind::Decoder));
    }

    #[test]
    fn unthemed_categories_fall_back_to_arcade() {
        assert_eq!(route_code("1600"), Launch::Open(WidgetKind::Arcade));
        assert_eq!(route_code("1900"), Launch::Open(WidgetKind::Arcade));
    }

    #[test]
    fn bad_codes_open_nothing() {
        for code in ["", "abc", "0", "2737", "9999"] {
            assert_eq!(route_code(code), Launch::Unknown, "input {code:?}");
        }
    }
}
