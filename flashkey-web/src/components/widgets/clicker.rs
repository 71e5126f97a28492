//! Idle clicker with purchasable upgrades.

use super::WidgetProps;
use crate::components::overlay::WidgetFrame;
use crate::hooks::use_second_tick;
use flashkey_core::ClickerState;
use yew::prelude::*;

#[function_component(ClickerGame)]
pub fn clicker_game(props: &WidgetProps) -> Html {
    let game = use_state(ClickerState::new);

    // Auto-clicker income accrues for as long as the widget is mounted.
    use_second_tick(true, {
        let game = game.clone();
        move || {
            let mut next = (*game).clone();
            next.tick();
            game.set(next);
        }
    });

    let mutate = |apply: fn(&mut ClickerState)| {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*game).clone();
            apply(&mut next);
            game.set(next);
        })
    };
    let on_click = mutate(ClickerState::click);
    let on_buy_auto = mutate(|state| {
        state.buy_auto_clicker();
    });
    let on_buy_multiplier = mutate(|state| {
        state.buy_multiplier();
    });

    let auto_cost = game.auto_clicker_cost();
    let multiplier_cost = game.multiplier_cost();
    let score = game.score();

    html! {
        <WidgetFrame
            title={props.title.clone()}
            code={props.code.clone()}
            on_close={props.on_close.clone()}
        >
            <div class="text-center mb-6">
                <div class="text-3xl font-bold text-white">{ score }</div>
            </div>
            <div class="grid gap-4">
                <button class="h-24 text-xl bg-blue-600 hover:bg-blue-700 rounded text-white" onclick={on_click}>
                    { format!("Click (+{})", game.multiplier()) }
                </button>
                <div class="grid grid-cols-2 gap-3 mt-2">
                    <button
                        class="flex flex-col items-center h-24 border border-slate-600 rounded text-slate-200"
                        disabled={(score as f64) < auto_cost}
                        onclick={on_buy_auto}
                    >
                        <span class="text-sm mt-1">{"Auto-clicker"}</span>
                        <span class="text-xs mt-1">{ format!("Cost: {}", auto_cost.floor() as u64) }</span>
                        <span class="text-xs">{ format!("Owned: {}", game.auto_clickers()) }</span>
                    </button>
                    <button
                        class="flex flex-col items-center h-24 border border-slate-600 rounded text-slate-200"
                        disabled={(score as f64) < multiplier_cost}
                        onclick={on_buy_multiplier}
                    >
                        <span class="text-sm mt-1">{"Multiplier"}</span>
                        <span class="text-xs mt-1">{ format!("Cost: {}", multiplier_cost.floor() as u64) }</span>
                        <span class="text-xs">{ format!("Level: {}x", game.multiplier()) }</span>
                    </button>
                </div>
            </div>
        </WidgetFrame>
    }
}
