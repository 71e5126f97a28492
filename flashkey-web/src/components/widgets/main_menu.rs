//! The drive's main menu: a fixed set of navigation entries.

use super::WidgetProps;
use crate::components::overlay::WidgetFrame;
use yew::prelude::*;

const MENU_ITEMS: [&str; 5] = ["Home", "Profile", "Documents", "About", "Settings"];

#[function_component(MainMenuWidget)]
pub fn main_menu_widget(props: &WidgetProps) -> Html {
    html! {
        <WidgetFrame
            title={props.title.clone()}
            code={props.code.clone()}
            on_close={props.on_close.clone()}
            accent="text-white"
        >
            <ul class="space-y-2" role="menu" aria-label="Main menu">
                { for MENU_ITEMS.iter().map(|label| html! {
                    <li role="none">
                        <button
                            type="button"
                            role="menuitem"
                            class="w-full text-left border border-slate-600 rounded px-3 py-2 text-slate-200 hover:bg-slate-700"
                        >
                            { *label }
                        </button>
                    </li>
                }) }
            </ul>
        </WidgetFrame>
    }
}
