//! Browser-only checks for the storage layer.

#![cfg(target_arch = "wasm32")]

use flashkey_core::RecentCodes;
use flashkey_web::storage::{RECENT_KEY, load_recent, save_recent};
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn recent_codes_round_trip_through_local_storage() {
    LocalStorage::delete(RECENT_KEY);
    assert!(load_recent().is_empty());

    let mut list = RecentCodes::new();
    list.record("10");
    list.record("20");
    save_recent(&list);

    assert_eq!(load_recent(), list);
    LocalStorage::delete(RECENT_KEY);
}

#[wasm_bindgen_test]
fn garbage_in_storage_degrades_to_an_empty_list() {
    LocalStorage::raw()
        .set_item(RECENT_KEY, "{not json")
        .unwrap();
    assert!(load_recent().is_empty());
    LocalStorage::delete(RECENT_KEY);
}
