//! Flashkey core
//!
//! Platform-agnostic logic for the interactive flash-drive toy: the static
//! category table, the code classifier, widget routing, the recent-codes
//! list, and the state machines behind every mini-game. Nothing in this
//! crate touches the DOM or a browser API, so all of it is testable natively.

pub mod arcade;
pub mod catalog;
pub mod cipher;
pub mod classify;
pub mod clicker;
pub mod horror;
pub mod parallax;
pub mod puzzle;
pub mod recent;
pub mod route;

// Re-export commonly used types
pub use arcade::{CatchDot, FIELD_TARGETS, ROUND_SECONDS, Spot, Target, TargetField};
pub use catalog::{CATEGORIES, Category, CategoryId, CategoryTheme, category_by_id, category_for, theme};
pub use cipher::{MAX_KEY, decode, encode};
pub use classify::{CodeClass, CodeInfo, MAX_CODE, MIN_CODE, Special, UNKNOWN_INFO, classify, parse_code};
pub use clicker::ClickerState;
pub use horror::{CAUGHT_SECONDS, HorrorGame, HorrorPhase, Threat};
pub use parallax::{MAX_DEGREES, REST, Tilt, tilt_for_pointer};
pub use puzzle::{Board, SHUFFLE_STEPS, SOLVED};
pub use recent::{RECENT_LIMIT, RecentCodes};
pub use route::{Launch, WidgetKind, route_code};
