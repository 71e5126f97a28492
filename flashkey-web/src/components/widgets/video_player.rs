//! Full-screen player for the demo video clip.

use super::{DEMO_VIDEO_URL, WidgetProps};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

fn apply_playback(video: &HtmlVideoElement, playing: bool) {
    if playing {
        match video.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log::warn!("video playback failed: {err:?}");
                    }
                });
            }
            Err(err) => log::warn!("video playback failed: {err:?}"),
        }
    } else if let Err(err) = video.pause() {
        log::warn!("video pause failed: {err:?}");
    }
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &WidgetProps) -> Html {
    let video_ref = use_node_ref();
    let playing = use_state(|| true);

    {
        let video_ref = video_ref.clone();
        use_effect_with(*playing, move |&playing| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                apply_playback(&video, playing);
            }
            || {}
        });
    }

    let toggle = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| playing.set(!*playing))
    };
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black/80 z-50 flex flex-col items-center justify-center animate-fade-in">
            <div class="relative w-full max-w-2xl">
                <button
                    type="button"
                    class="absolute -top-12 right-0 text-white hover:bg-white/20"
                    aria-label="Close"
                    onclick={on_close}
                >
                    {"X"}
                </button>
                <div class="bg-black rounded-lg overflow-hidden">
                    <video ref={video_ref} onclick={toggle} class="w-full h-auto" controls={true}>
                        <source src={DEMO_VIDEO_URL} type="video/mp4" />
                        {"Your browser does not support the video tag."}
                    </video>
                </div>
                <div class="mt-4 text-center text-white">
                    <p>{ format!("{} (code {})", props.title, props.code) }</p>
                </div>
            </div>
        </div>
    }
}
