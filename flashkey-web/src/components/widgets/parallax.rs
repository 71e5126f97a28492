//! Pointer-driven 3D parallax card.

use super::WidgetProps;
use crate::components::overlay::WidgetFrame;
use flashkey_core::{REST, Tilt, tilt_for_pointer};
use web_sys::Element;
use yew::prelude::*;

const FACES: [(&str, &str, &str); 6] = [
    ("Front", "bg-blue-500/80", "translateZ(80px)"),
    ("Back", "bg-red-500/80", "rotateY(180deg) translateZ(80px)"),
    ("Right", "bg-green-500/80", "rotateY(90deg) translateZ(80px)"),
    ("Left", "bg-yellow-500/80", "rotateY(-90deg) translateZ(80px)"),
    ("Top", "bg-purple-500/80", "rotateX(90deg) translateZ(80px)"),
    ("Bottom", "bg-pink-500/80", "rotateX(-90deg) translateZ(80px)"),
];

#[function_component(ParallaxCard)]
pub fn parallax_card(props: &WidgetProps) -> Html {
    let stage_ref = use_node_ref();
    let tilt = use_state(|| REST);

    let on_move = {
        let stage_ref = stage_ref.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(stage) = stage_ref.cast::<Element>() else {
                return;
            };
            let rect = stage.get_bounding_client_rect();
            let px = f64::from(e.client_x()) - rect.left();
            let py = f64::from(e.client_y()) - rect.top();
            tilt.set(tilt_for_pointer(px, py, rect.width(), rect.height()));
        })
    };
    let on_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(REST))
    };

    let Tilt { x, y } = *tilt;
    html! {
        <WidgetFrame
            title={props.title.clone()}
            code={props.code.clone()}
            on_close={props.on_close.clone()}
            accent="text-cyan-400"
        >
            <p class="text-slate-400 text-sm mb-2 text-center">{"Move the pointer for the 3D effect"}</p>
            <div
                ref={stage_ref}
                class="h-64 bg-slate-900 rounded-lg mb-4 relative overflow-hidden cursor-pointer"
                style="perspective: 1000px;"
                onmousemove={on_move}
                onmouseleave={on_leave}
            >
                <div
                    class="absolute inset-0 flex items-center justify-center transition-transform duration-200"
                    style={format!("transform: rotateX({x:.1}deg) rotateY({y:.1}deg); transform-style: preserve-3d;")}
                >
                    <div class="relative w-40 h-40" style="transform-style: preserve-3d;">
                        { for FACES.iter().map(|(label, color, transform)| html! {
                            <div
                                class={format!("absolute inset-0 {color} flex items-center justify-center text-white font-bold")}
                                style={format!("transform: {transform};")}
                            >
                                { *label }
                            </div>
                        }) }
                    </div>
                </div>
                <div class="absolute inset-0 bg-gradient-to-t from-black/30 to-transparent pointer-events-none" />
                <div class="absolute inset-0 bg-gradient-to-l from-black/30 to-transparent pointer-events-none" />
            </div>
            <p class="text-slate-300 text-sm">
                {"An interactive cube with a parallax effect. It reorients to follow the pointer."}
            </p>
        </WidgetFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn card_renders_all_faces_at_the_rest_pose() {
        let props = WidgetProps {
            code: AttrValue::from("2200"),
            title: AttrValue::from("Interactive Scene"),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ParallaxCard>::with_props(props).render());
        for (label, _, _) in FACES {
            assert!(html.contains(label), "missing face {label}");
        }
        assert!(html.contains("rotateX(15.0deg) rotateY(15.0deg)"));
    }
}
