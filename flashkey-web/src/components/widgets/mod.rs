//! The widget set: one self-contained component per mountable surface.
//!
//! Widgets share no state with each other or with the shell beyond the
//! props below; everything they mutate is created on mount and dropped on
//! close.

pub mod arcade;
pub mod catch_dot;
pub mod clicker;
pub mod decoder;
pub mod horror;
pub mod main_menu;
pub mod music_player;
pub mod parallax;
pub mod puzzle;
pub mod video_player;

use flashkey_core::WidgetKind;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

/// Demo clip consumed read-only by the video player.
pub const DEMO_VIDEO_URL: &str =
    "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4";
/// Demo track consumed read-only by the music player.
pub const DEMO_AUDIO_URL: &str = "https://dl.dropbox.com/s/0c2a5sw5xsph5st/sample-3s.mp3";

/// Props common to every widget.
#[derive(Properties, PartialEq, Clone)]
pub struct WidgetProps {
    /// The code that opened the widget, for the frame's subtitle.
    #[prop_or_default]
    pub code: AttrValue,
    /// Display title from the classifier.
    pub title: AttrValue,
    pub on_close: Callback<()>,
}

#[cfg(target_arch = "wasm32")]
fn clock_entropy() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_entropy() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}

/// Per-mount rng for shuffles and target placement.
pub(crate) fn session_rng() -> SmallRng {
    SmallRng::seed_from_u64(clock_entropy())
}

#[derive(Properties, PartialEq, Clone)]
pub struct ActiveWidgetProps {
    pub kind: WidgetKind,
    #[prop_or_default]
    pub code: AttrValue,
    pub title: AttrValue,
    pub on_close: Callback<()>,
}

/// Mount the widget selected by the router.
#[function_component(ActiveWidget)]
pub fn active_widget(props: &ActiveWidgetProps) -> Html {
    let widget_props = WidgetProps {
        code: props.code.clone(),
        title: props.title.clone(),
        on_close: props.on_close.clone(),
    };
    match props.kind {
        WidgetKind::VideoPlayer => html! { <video_player::VideoPlayer ..widget_props /> },
        WidgetKind::MusicPlayer => html! { <music_player::MusicPlayer ..widget_props /> },
        WidgetKind::MainMenu => html! { <main_menu::MainMenuWidget ..widget_props /> },
        WidgetKind::Clicker => html! { <clicker::ClickerGame ..widget_props /> },
        WidgetKind::CatchDot => html! { <catch_dot::CatchDotGame ..widget_props /> },
        WidgetKind::Arcade => html! { <arcade::ArcadeGame ..widget_props /> },
        WidgetKind::Puzzle => html! { <puzzle::PuzzleGame ..widget_props /> },
        WidgetKind::Horror => html! { <horror::HorrorSequence ..widget_props /> },
        WidgetKind::Parallax => html! { <parallax::ParallaxCard ..widget_props /> },
        WidgetKind::Decoder => html! { <decoder::SecretDecoder ..widget_props /> },
    }
}
