pub mod handlers;
pub mod state;

use crate::components::widgets::ActiveWidget;
use crate::pages::drive::DrivePanel;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    let on_submit = handlers::build_submit(&app_state);
    let on_close = handlers::build_close(&app_state);

    // A mounted widget is exclusive: it covers the shell until closed.
    let overlay = (*app_state.active).map(|kind| {
        let title = app_state
            .info
            .as_ref()
            .map_or("Flash drive", |current| current.title);
        html! {
            <ActiveWidget
                {kind}
                code={(*app_state.last_code).clone()}
                title={AttrValue::from(title)}
                on_close={on_close}
            />
        }
    });

    html! {
        <>
            <DrivePanel
                last_code={(*app_state.last_code).clone()}
                recent={(*app_state.recent).clone()}
                info={*app_state.info}
                notice={(*app_state.notice).clone()}
                {on_submit}
            />
            { overlay.unwrap_or_default() }
        </>
    }
}
