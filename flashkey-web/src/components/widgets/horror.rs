//! The scripted flashlight horror sequence.

use super::{WidgetProps, session_rng};
use crate::components::overlay::WidgetFrame;
use crate::hooks::use_second_tick;
use flashkey_core::{HorrorGame, HorrorPhase};
use yew::prelude::*;

#[function_component(HorrorSequence)]
pub fn horror_sequence(props: &WidgetProps) -> Html {
    let rng = use_mut_ref(session_rng);
    let game = use_state(HorrorGame::new);

    let ticking = matches!(game.phase(), HorrorPhase::Stalking | HorrorPhase::Caught);
    use_second_tick(ticking, {
        let game = game.clone();
        let rng = rng.clone();
        move || {
            let mut next = (*game).clone();
            next.tick(&mut *rng.borrow_mut());
            game.set(next);
        }
    });

    let on_start = {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*game).clone();
            next.start();
            game.set(next);
        })
    };
    let on_flashlight = {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*game).clone();
            next.toggle_flashlight();
            game.set(next);
        })
    };

    let body = match game.phase() {
        HorrorPhase::Intro => html! {
            <div class="text-center space-y-4">
                <p class="text-slate-300">
                    {"You are inside an abandoned house. It is dark, and your flashlight has a limited charge."}
                </p>
                <p class="text-red-400">{"Something is stalking you in the dark..."}</p>
                <button class="mt-4 w-full bg-red-900 hover:bg-red-800 text-white rounded px-4 py-2" onclick={on_start}>
                    {"Begin"}
                </button>
            </div>
        },
        HorrorPhase::Stalking => {
            let brightness = if game.flashlight_on() { 0.7 } else { 0.4 };
            html! {
                <div>
                    <div
                        class="relative h-64 bg-slate-950 rounded-lg mb-4 flex items-center justify-center overflow-hidden"
                        style={format!("filter: brightness({brightness});")}
                    >
                        <div
                            class="absolute inset-0 bg-black pointer-events-none"
                            style={format!("opacity: {};", f64::from(game.darkness()) / 100.0)}
                        />
                        <div class="text-red-500 opacity-50 absolute bottom-2 right-2 text-xs">
                            { game.threat().message() }
                        </div>
                        <div class="absolute inset-0 flex items-center justify-center">
                            <div class="text-slate-700 text-2xl font-bold">
                                { if game.flashlight_on() { "..." } else { "......" } }
                            </div>
                        </div>
                    </div>
                    <div class="flex justify-between text-sm text-slate-400 mb-2">
                        <div>{ format!("Battery: {}%", game.battery()) }</div>
                        <div class="text-red-400">{ format!("Danger: {}%", game.danger()) }</div>
                    </div>
                    <button
                        class="w-full bg-slate-700 hover:bg-slate-600 text-white rounded px-4 py-2"
                        disabled={game.battery() <= 0}
                        onclick={on_flashlight}
                    >
                        { if game.flashlight_on() { "Turn flashlight off" } else { "Turn flashlight on" } }
                    </button>
                </div>
            }
        }
        HorrorPhase::Caught => html! {
            <div class="text-center">
                <div class="h-64 bg-red-900 rounded-lg flex items-center justify-center animate-pulse mb-4">
                    <div class="text-6xl">{"\u{1F479}"}</div>
                </div>
                <p class="text-red-500 text-2xl font-bold">{"IT FOUND YOU!"}</p>
            </div>
        },
        HorrorPhase::Ending => html! {
            <div class="text-center space-y-4">
                <p class="text-red-500 text-xl font-bold">{"You did not survive"}</p>
                <p class="text-slate-400">{"The thing from the dark caught up with you..."}</p>
                <button class="mt-4 w-full bg-red-900 hover:bg-red-800 text-white rounded px-4 py-2" onclick={on_start.clone()}>
                    {"Try again"}
                </button>
            </div>
        },
    };

    html! {
        <WidgetFrame
            title={props.title.clone()}
            code={props.code.clone()}
            on_close={props.on_close.clone()}
            accent="text-red-500"
        >
            { body }
        </WidgetFrame>
    }
}
