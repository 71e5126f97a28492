//! Whole-range sweeps over the code map: every code from 1 to 2736 must
//! classify and route consistently, and nothing outside that range may.

use flashkey_core::{
    CATEGORIES, CodeClass, Launch, RecentCodes, Special, UNKNOWN_INFO, WidgetKind, category_for,
    classify, route_code,
};

#[test]
fn reserved_codes_classify_to_their_fixed_records() {
    let slots = [
        Special::Video,
        Special::Music,
        Special::Menu,
        Special::Clicker,
        Special::Game,
    ];
    for (code, slot) in (1..=5u16).zip(slots) {
        let info = classify(&code.to_string());
        assert_eq!(info.class, CodeClass::Special(slot));
        assert_eq!(info.kind, slot.as_str());
        assert_ne!(info, UNKNOWN_INFO);
    }
}

#[test]
fn every_in_range_code_classifies_into_its_category() {
    for code in 6..=2736u16 {
        let expected = category_for(code).expect("table covers the full range");
        let info = classify(&code.to_string());
        assert_eq!(
            info.class,
            CodeClass::Category(expected.id),
            "code {code} should land in {}",
            expected.name
        );
    }
}

#[test]
fn table_union_with_reserved_codes_covers_the_space_exactly() {
    let mut covered = vec![false; 2737];
    for slot in 1..=5usize {
        covered[slot] = true;
    }
    for cat in &CATEGORIES {
        for code in cat.start..=cat.end {
            covered[usize::from(code)] = true;
        }
    }
    assert!(
        covered[1..].iter().all(|&c| c),
        "every code in 1..=2736 is covered"
    );
}

#[test]
fn every_in_range_code_routes_to_a_widget() {
    for code in 1..=2736u16 {
        match route_code(&code.to_string()) {
            Launch::Open(_) => {}
            Launch::Unknown => panic!("code {code} failed to route"),
        }
    }
}

#[test]
fn games_widget_split_tracks_the_modulus() {
    for code in 6..=500u16 {
        let expected = match code % 3 {
            0 => WidgetKind::Arcade,
            1 => WidgetKind::Puzzle,
            _ => WidgetKind::CatchDot,
        };
        assert_eq!(route_code(&code.to_string()), Launch::Open(expected));
    }
}

#[test]
fn out_of_range_input_neither_classifies_nor_routes() {
    for code in ["0", "2737", "10000", "-1", "four", "3.5", ""] {
        assert_eq!(classify(code), UNKNOWN_INFO, "classify {code:?}");
        assert_eq!(route_code(code), Launch::Unknown, "route {code:?}");
    }
}

#[test]
fn menu_code_always_routes_to_the_menu() {
    // Prior submissions never affect routing; the function is pure.
    let mut recent = RecentCodes::new();
    for code in ["9999", "42", "3"] {
        recent.record(code);
        assert_eq!(route_code("3"), Launch::Open(WidgetKind::MainMenu));
    }
}

#[test]
fn submission_history_example_from_the_product_brief() {
    let mut recent = RecentCodes::new();
    for code in ["10", "20", "10", "30", "40", "50"] {
        recent.record(code);
    }
    assert_eq!(recent.as_slice(), ["50", "40", "30", "10", "20"]);
}
