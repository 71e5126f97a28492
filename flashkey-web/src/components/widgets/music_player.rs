//! Looping audio player with volume and mute controls.

use super::{DEMO_AUDIO_URL, WidgetProps};
use crate::components::overlay::WidgetFrame;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, HtmlInputElement};
use yew::prelude::*;

fn apply_playback(audio: &HtmlAudioElement, playing: bool) {
    if playing {
        match audio.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log::warn!("audio playback failed: {err:?}");
                    }
                });
            }
            Err(err) => log::warn!("audio playback failed: {err:?}"),
        }
    } else if let Err(err) = audio.pause() {
        log::warn!("audio pause failed: {err:?}");
    }
}

#[function_component(MusicPlayer)]
pub fn music_player(props: &WidgetProps) -> Html {
    let audio_ref = use_node_ref();
    let playing = use_state(|| true);
    let muted = use_state(|| false);
    let volume = use_state(|| 50_u8);

    {
        let audio_ref = audio_ref.clone();
        use_effect_with(*playing, move |&playing| {
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                audio.set_loop(true);
                apply_playback(&audio, playing);
            }
            || {}
        });
    }
    {
        let audio_ref = audio_ref.clone();
        use_effect_with((*muted, *volume), move |&(muted, volume)| {
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                audio.set_muted(muted);
                audio.set_volume(f64::from(volume) / 100.0);
            }
            || {}
        });
    }

    let toggle_playback = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| playing.set(!*playing))
    };
    let toggle_mute = {
        let muted = muted.clone();
        Callback::from(move |_: MouseEvent| muted.set(!*muted))
    };
    let on_volume = {
        let volume = volume.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(level) = input.value().parse::<u8>() {
                volume.set(level.min(100));
            }
        })
    };

    html! {
        <WidgetFrame
            title={props.title.clone()}
            code={props.code.clone()}
            on_close={props.on_close.clone()}
            accent="text-green-400"
        >
            <div class="bg-gray-800 rounded-lg p-4 mb-4">
                <div class="flex items-center justify-between mb-2">
                    <button type="button" class="text-white" onclick={toggle_playback}>
                        { if *playing { "Pause" } else { "Play" } }
                    </button>
                    <div class="flex items-center gap-2">
                        <button type="button" class="text-white" onclick={toggle_mute}>
                            { if *muted { "Unmute" } else { "Mute" } }
                        </button>
                        <input
                            type="range"
                            class="w-24"
                            min="0"
                            max="100"
                            step="1"
                            value={volume.to_string()}
                            oninput={on_volume}
                        />
                    </div>
                </div>
            </div>
            <audio ref={audio_ref} class="hidden">
                <source src={DEMO_AUDIO_URL} type="audio/mpeg" />
                {"Your browser does not support the audio element."}
            </audio>
        </WidgetFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn player_embeds_the_demo_track_and_controls() {
        let props = WidgetProps {
            code: AttrValue::from("2"),
            title: AttrValue::from("Music Player"),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<MusicPlayer>::with_props(props).render());
        assert!(html.contains(DEMO_AUDIO_URL));
        assert!(html.contains("Pause"));
        assert!(html.contains("Mute"));
        assert!(html.contains("type=\"range\""));
    }
}
