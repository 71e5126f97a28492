//! Card summarizing what a submitted code unlocked.

use flashkey_core::{CodeClass, CodeInfo, category_by_id};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub code: AttrValue,
    pub info: CodeInfo,
}

#[function_component(CodeInfoCard)]
pub fn code_info_card(props: &Props) -> Html {
    // Reserved codes live outside the category table, so their badge falls
    // back to the neutral style, same as the sentinel.
    let (badge_name, badge_color) = match props.info.class {
        CodeClass::Category(id) => {
            let category = category_by_id(id);
            (category.name, category.color)
        }
        CodeClass::Special(_) | CodeClass::Unknown => ("Unknown", "bg-gray-600"),
    };

    html! {
        <div class="border border-slate-700 bg-slate-900 rounded-lg shadow-md p-4">
            <div class="flex justify-between items-start pb-2">
                <h2 class="text-xl text-blue-400 font-mono">{ props.info.title }</h2>
                <span class={format!("badge text-xs px-2 py-1 rounded text-white {badge_color}")}>
                    { badge_name }
                </span>
            </div>
            <p class="text-slate-300 text-sm mb-2">{ props.info.description }</p>
            <div class="flex justify-between items-center text-xs">
                <span class="text-slate-500">{ format!("Type: {}", props.info.kind) }</span>
                <span class="text-slate-500">{ format!("Code: {}", props.code) }</span>
            </div>
        </div>
    }
}
