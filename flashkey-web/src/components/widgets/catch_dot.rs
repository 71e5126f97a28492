//! Catch-the-dot: click the dot before the 30-second bell.

use super::{WidgetProps, session_rng};
use crate::components::overlay::WidgetFrame;
use crate::hooks::use_second_tick;
use flashkey_core::CatchDot;
use yew::prelude::*;

#[function_component(CatchDotGame)]
pub fn catch_dot_game(props: &WidgetProps) -> Html {
    let rng = use_mut_ref(session_rng);
    let game = use_state(CatchDot::new);

    use_second_tick(!game.is_over(), {
        let game = game.clone();
        move || {
            let mut next = (*game).clone();
            next.tick();
            game.set(next);
        }
    });

    let on_catch = {
        let game = game.clone();
        let rng = rng.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*game).clone();
            next.catch(&mut *rng.borrow_mut());
            game.set(next);
        })
    };

    let on_reset = {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*game).clone();
            next.reset();
            game.set(next);
        })
    };

    let dot = game.dot();
    html! {
        <WidgetFrame
            title={props.title.clone()}
            code={props.code.clone()}
            on_close={props.on_close.clone()}
        >
            <div class="flex justify-between mb-2 text-slate-300">
                <div>{ format!("Score: {}", game.score()) }</div>
                <div>{ format!("Time: {}s", game.time_left()) }</div>
            </div>
            <div class="relative bg-slate-900 h-64 rounded-lg overflow-hidden mb-4">
                if !game.is_over() {
                    <button
                        class="absolute w-10 h-10 bg-blue-500 hover:bg-blue-600 rounded-full flex items-center justify-center text-white"
                        style={format!("left: {:.1}%; top: {:.1}%; transform: translate(-50%, -50%);", dot.x, dot.y)}
                        onclick={on_catch}
                    >
                        {"+1"}
                    </button>
                } else {
                    <div class="absolute inset-0 flex flex-col items-center justify-center bg-black/60">
                        <div class="text-xl font-bold mb-2 text-blue-400">{"Game over!"}</div>
                        <div class="mb-4 text-slate-300">{ format!("Final score: {}", game.score()) }</div>
                        <button class="bg-blue-600 hover:bg-blue-700 rounded px-4 py-2 text-white" onclick={on_reset}>
                            {"Play again"}
                        </button>
                    </div>
                }
            </div>
        </WidgetFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn fresh_round_shows_the_dot_and_full_clock() {
        let props = WidgetProps {
            code: AttrValue::from("5"),
            title: AttrValue::from("Mini-Game"),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<CatchDotGame>::with_props(props).render());
        assert!(html.contains("Time: 30s"));
        assert!(html.contains("Score: 0"));
        assert!(html.contains("+1"));
    }
}
