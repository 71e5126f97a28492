//! Sliding 8-puzzle widget.

use super::{WidgetProps, session_rng};
use crate::components::overlay::WidgetFrame;
use flashkey_core::Board;
use yew::prelude::*;

#[function_component(PuzzleGame)]
pub fn puzzle_game(props: &WidgetProps) -> Html {
    let rng = use_mut_ref(session_rng);
    let board = use_state({
        let rng = rng.clone();
        move || Board::shuffled(&mut *rng.borrow_mut())
    });

    let on_tile = |index: usize| {
        let board = board.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*board).clone();
            if next.slide(index) {
                board.set(next);
            }
        })
    };

    let on_shuffle = {
        let board = board.clone();
        let rng = rng.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*board).clone();
            next.shuffle(&mut *rng.borrow_mut());
            board.set(next);
        })
    };

    let solved = board.is_solved();
    html! {
        <WidgetFrame
            title={props.title.clone()}
            code={props.code.clone()}
            on_close={props.on_close.clone()}
        >
            <div class="text-center mb-2 text-slate-300">
                { format!("Moves: {}", board.moves()) }
            </div>
            <div class="bg-slate-900 p-4 rounded-lg mb-4">
                <div class="grid grid-cols-3 gap-2 w-64 h-64 mx-auto">
                    { for board.cells().iter().enumerate().map(|(index, &tile)| {
                        let class = if tile == 0 {
                            "invisible"
                        } else {
                            "bg-blue-600 hover:bg-blue-700 rounded-md flex items-center justify-center text-white text-2xl font-bold"
                        };
                        html! {
                            <button {class} onclick={on_tile(index)} disabled={solved}>
                                { (tile != 0).then(|| tile.to_string()).unwrap_or_default() }
                            </button>
                        }
                    }) }
                </div>
            </div>
            if solved {
                <div class="text-center p-3 bg-blue-900/40 rounded-lg mb-4">
                    <div class="text-lg font-bold text-blue-400">{"Puzzle solved!"}</div>
                    <div class="text-slate-300">{ format!("Moves taken: {}", board.moves()) }</div>
                </div>
            }
            <button class="w-full bg-blue-600 hover:bg-blue-700 rounded px-4 py-2 text-white" onclick={on_shuffle}>
                {"Shuffle"}
            </button>
        </WidgetFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn a_fresh_board_renders_eight_tiles() {
        let props = WidgetProps {
            code: AttrValue::from("7"),
            title: AttrValue::from("Brain Teaser"),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<PuzzleGame>::with_props(props).render());
        // Eight visible tiles plus one invisible blank cell.
        assert_eq!(html.matches("rounded-md").count(), 8);
        assert_eq!(html.matches("invisible").count(), 1);
        assert!(html.contains("Moves: 0"));
        assert!(html.contains("Shuffle"));
    }
}
