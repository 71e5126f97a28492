//! The flash-drive face: an SVG body with a code readout plus the input form.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_submit: Callback<String>,
}

#[function_component(DriveDisplay)]
pub fn drive_display(props: &Props) -> Html {
    let code = use_state(String::new);

    let oninput = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            code.set(input.value());
        })
    };

    let onsubmit = {
        let code = code.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*code).clone());
            code.set(String::new());
        })
    };

    let readout = if code.is_empty() {
        "ENTER CODE".to_string()
    } else {
        (*code).clone()
    };

    html! {
        <div class="relative w-full max-w-md mx-auto">
            <div class="mb-6">
                <svg viewBox="0 0 400 200" class="w-full h-auto" xmlns="http://www.w3.org/2000/svg">
                    // Body, connector, cap, activity LED
                    <rect x="100" y="60" width="200" height="80" rx="8" fill="#333" />
                    <rect x="50" y="75" width="50" height="50" fill="#888" />
                    <rect x="300" y="60" width="30" height="80" rx="4" fill="#555" />
                    <circle cx="280" cy="100" r="8" fill="#f00" />
                    <rect x="130" y="80" width="140" height="40" rx="4" fill="#222" />
                    <text x="200" y="106" font-size="20" fill="#0FA0CE" text-anchor="middle" class="font-mono">
                        { readout }
                    </text>
                </svg>
            </div>

            <form {onsubmit} class="flex flex-col gap-3">
                <input
                    value={(*code).clone()}
                    {oninput}
                    placeholder="Enter a code"
                    class="text-center font-mono text-lg"
                    maxlength="4"
                />
                <button type="submit" class="w-full">{"Activate"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn empty_display_prompts_for_a_code() {
        let props = Props {
            on_submit: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<DriveDisplay>::with_props(props).render());
        assert!(html.contains("ENTER CODE"));
        assert!(html.contains("maxlength=\"4\""));
        assert!(html.contains("Activate"));
    }
}
