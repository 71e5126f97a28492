use flashkey_core::{CodeInfo, RecentCodes, WidgetKind};
use yew::prelude::*;

/// Shell state: the resting display plus whichever widget is mounted.
#[derive(Clone)]
pub struct AppState {
    pub active: UseStateHandle<Option<WidgetKind>>,
    pub last_code: UseStateHandle<AttrValue>,
    pub info: UseStateHandle<Option<CodeInfo>>,
    pub recent: UseStateHandle<RecentCodes>,
    pub notice: UseStateHandle<Option<AttrValue>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        active: use_state(|| None::<WidgetKind>),
        last_code: use_state(AttrValue::default),
        info: use_state(|| None::<CodeInfo>),
        // Loaded once at startup; every change is written straight back.
        recent: use_state(crate::storage::load_recent),
        notice: use_state(|| None::<AttrValue>),
    }
}
