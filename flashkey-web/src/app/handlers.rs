use crate::app::state::AppState;
use crate::storage;
use flashkey_core::{Launch, classify, route_code};
use yew::prelude::*;

/// Submission path: record the code, update and persist the recent list,
/// classify, then either mount the routed widget or surface a notice. The
/// notice path leaves the previous info card and widget state untouched.
pub fn build_submit(state: &AppState) -> Callback<String> {
    let active = state.active.clone();
    let last_code = state.last_code.clone();
    let info = state.info.clone();
    let recent = state.recent.clone();
    let notice = state.notice.clone();
    Callback::from(move |raw: String| {
        let code = raw.trim().to_string();
        if code.is_empty() {
            return;
        }
        last_code.set(AttrValue::from(code.clone()));

        let mut list = (*recent).clone();
        list.record(&code);
        storage::save_recent(&list);
        recent.set(list);

        match route_code(&code) {
            Launch::Open(widget) => {
                info.set(Some(classify(&code)));
                notice.set(None);
                active.set(Some(widget));
            }
            Launch::Unknown => {
                notice.set(Some(AttrValue::from(format!("Unknown code: {code}"))));
            }
        }
    })
}

/// Closing a widget returns the shell to its resting state.
pub fn build_close(state: &AppState) -> Callback<()> {
    let active = state.active.clone();
    Callback::from(move |()| active.set(None))
}
