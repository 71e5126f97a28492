//! Caesar-cipher encode/decode toy.

use super::WidgetProps;
use crate::components::overlay::WidgetFrame;
use flashkey_core::{MAX_KEY, cipher};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[function_component(SecretDecoder)]
pub fn secret_decoder(props: &WidgetProps) -> Html {
    let message = use_state(String::new);
    let key = use_state(|| 3_u8);
    let encoded = use_state(|| None::<String>);
    let decoded = use_state(|| None::<String>);

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };
    let on_key = {
        let key = key.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let parsed = input.value().parse::<u8>().unwrap_or(1);
            key.set(parsed.clamp(1, MAX_KEY));
        })
    };
    let on_encode = {
        let message = message.clone();
        let key = key.clone();
        let encoded = encoded.clone();
        let decoded = decoded.clone();
        Callback::from(move |_: MouseEvent| {
            if message.is_empty() {
                return;
            }
            encoded.set(Some(cipher::encode(&message, *key)));
            decoded.set(None);
        })
    };
    let on_decode = {
        let key = key.clone();
        let encoded = encoded.clone();
        let decoded = decoded.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(text) = encoded.as_ref() {
                decoded.set(Some(cipher::decode(text, *key)));
            }
        })
    };

    html! {
        <WidgetFrame
            title={props.title.clone()}
            code={props.code.clone()}
            on_close={props.on_close.clone()}
            accent="text-amber-400"
        >
            <div class="space-y-4">
                <div class="space-y-2">
                    <label class="text-sm text-slate-400" for="decoder-message">{"Your message:"}</label>
                    <textarea
                        id="decoder-message"
                        value={(*message).clone()}
                        oninput={on_message}
                        class="w-full p-2 rounded bg-slate-900 text-slate-200 border border-slate-700"
                        rows="2"
                        placeholder="Enter text to encode"
                    />
                </div>
                <div class="flex gap-2">
                    <div class="space-y-1 flex-1">
                        <label class="text-xs text-slate-400" for="decoder-key">{"Cipher key:"}</label>
                        <input
                            id="decoder-key"
                            type="number"
                            min="1"
                            max={MAX_KEY.to_string()}
                            value={key.to_string()}
                            oninput={on_key}
                            class="w-full p-2 rounded bg-slate-900 text-slate-200 border border-slate-700"
                        />
                    </div>
                    <button
                        class="bg-amber-600 hover:bg-amber-700 self-end rounded px-4 py-2 text-white"
                        disabled={message.is_empty()}
                        onclick={on_encode}
                    >
                        {"Encode"}
                    </button>
                </div>
                if let Some(text) = encoded.as_ref() {
                    <div class="space-y-2">
                        <label class="text-sm text-slate-400">{"Encoded message:"}</label>
                        <div class="p-2 rounded bg-slate-900 text-amber-400 border border-slate-700 font-mono break-all">
                            { text.clone() }
                        </div>
                        <button class="w-full bg-blue-600 hover:bg-blue-700 rounded px-4 py-2 text-white" onclick={on_decode}>
                            {"Decode"}
                        </button>
                    </div>
                }
                if let Some(text) = decoded.as_ref() {
                    <div class="space-y-1">
                        <label class="text-sm text-slate-400">{"Decoded message:"}</label>
                        <div class="p-2 rounded bg-slate-900 text-green-400 border border-slate-700 font-mono break-all">
                            { text.clone() }
                        </div>
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
    fn decoder_opens_with_the_classic_key() {
        let props = WidgetProps {
            code: AttrValue::from("2500"),
            title: AttrValue::from("Secret Message"),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SecretDecoder>::with_props(props).render());
        assert!(html.contains("Cipher key:"));
        assert!(html.contains("value=\"3\""));
        assert!(html.contains("Encode"));
        assert!(!html.contains("Decoded message:"));
    }
}
