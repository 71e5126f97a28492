//! Full-screen frame shared by every widget.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// The code that opened the widget; hidden when empty.
    #[prop_or_default]
    pub code: AttrValue,
    /// Title color class; widgets tint the frame to their theme.
    #[prop_or(AttrValue::Static("text-blue-400"))]
    pub accent: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Modal-like overlay: dims the page, centers a card, and owns the close
/// affordances. Only one frame is ever mounted at a time.
#[function_component(WidgetFrame)]
pub fn widget_frame(props: &Props) -> Html {
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    let title_class = format!("text-xl font-bold {}", props.accent);
    html! {
        <div class="fixed inset-0 bg-black/80 z-50 flex flex-col items-center justify-center animate-fade-in" role="presentation">
            <div
                class="relative w-full max-w-md bg-slate-800 p-6 rounded-lg border border-slate-700"
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                onkeydown={on_keydown}
            >
                <button
                    type="button"
                    class="absolute top-2 right-2 text-slate-400 hover:text-white"
                    aria-label="Close"
                    onclick={on_close}
                >
                    {"X"}
                </button>
                <div class="text-center mb-4">
                    <h3 class={title_class}>{ props.title.clone() }</h3>
                    { (!props.code.is_empty()).then(|| html! {
                        <p class="text-slate-500 text-sm">{ format!("Code {}", props.code) }</p>
                    }).unwrap_or_default() }
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn frame_renders_title_code_and_body() {
        let props = Props {
            title: AttrValue::from("Brain Teaser"),
            on_close: Callback::noop(),
            code: AttrValue::from("7"),
            accent: AttrValue::from("text-blue-400"),
            children: Children::new(vec![yew::html! { <p>{"body"}</p> }]),
        };
        let html = block_on(LocalServerRenderer::<WidgetFrame>::with_props(props).render());
        assert!(html.contains("Brain Teaser"));
        assert!(html.contains("Code 7"));
        assert!(html.contains("body"));
        assert!(html.contains("aria-modal"));
    }

    #[test]
    fn code_line_is_omitted_when_empty() {
        let props = Props {
            title: AttrValue::from("Video Player"),
            on_close: Callback::noop(),
            code: AttrValue::default(),
            accent: AttrValue::from("text-blue-400"),
            children: Children::default(),
        };
        let html = block_on(LocalServerRenderer::<WidgetFrame>::with_props(props).render());
        assert!(!html.contains("Code "));
    }
}
