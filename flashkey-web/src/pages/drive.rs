//! The resting shell: drive face, code input, hints and the info card.

use crate::components::code_info_card::CodeInfoCard;
use crate::components::drive_display::DriveDisplay;
use flashkey_core::{CodeInfo, RecentCodes};
use yew::prelude::*;

const HINTS: [(&str, &str); 5] = [
    ("1", "Video"),
    ("2", "Music"),
    ("3", "Menu"),
    ("4", "Clicker"),
    ("5", "Game"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct DrivePanelProps {
    #[prop_or_default]
    pub last_code: AttrValue,
    #[prop_or_default]
    pub recent: RecentCodes,
    #[prop_or_default]
    pub info: Option<CodeInfo>,
    #[prop_or_default]
    pub notice: Option<AttrValue>,
    pub on_submit: Callback<String>,
}

#[function_component(DrivePanel)]
pub fn drive_panel(props: &DrivePanelProps) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-b from-gray-100 to-gray-200 py-12 px-4">
            <div class="max-w-lg mx-auto">
                <h1 class="text-3xl font-bold text-center mb-2">{"Interactive USB Flash Drive"}</h1>
                <p class="text-center text-gray-600 mb-8">
                    {"Enter a code from 1 to 2736 to unlock its hidden feature"}
                </p>

                <div class="bg-white p-6 rounded-lg shadow-lg mb-6">
                    <DriveDisplay on_submit={props.on_submit.clone()} />
                </div>

                if let Some(notice) = props.notice.as_ref() {
                    <div class="bg-red-100 text-red-800 p-3 rounded-lg shadow-md mb-6" role="alert">
                        { notice.clone() }
                    </div>
                }

                if let Some(info) = props.info {
                    <div class="mb-6">
                        <CodeInfoCard code={props.last_code.clone()} {info} />
                    </div>
                }

                if !props.last_code.is_empty() {
                    <div class="bg-white p-4 rounded-lg shadow-md">
                        <h2 class="text-lg font-semibold mb-2">{"Codes to try:"}</h2>
                        <ul class="grid grid-cols-5 gap-2">
                            { for HINTS.iter().map(|(code, label)| html! {
                                <li class="bg-gray-100 p-2 rounded text-center">
                                    { format!("{code} - {label}") }
                                </li>
                            }) }
                        </ul>

                        if !props.recent.is_empty() {
                            <div class="mt-4">
                                <h3 class="text-sm font-medium mb-1">{"Recent codes:"}</h3>
                                <div class="flex flex-wrap gap-2">
                                    { for props.recent.as_slice().iter().map(|code| html! {
                                        <span class="bg-blue-100 text-blue-800 text-xs px-2 py-1 rounded">
                                            { code.clone() }
                                        </span>
                                    }) }
                                </div>
                            </div>
                        }
                    </div>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashkey_core::classify;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(props: DrivePanelProps) -> String {
        block_on(LocalServerRenderer::<DrivePanel>::with_props(props).render())
    }

    #[test]
    fn resting_shell_hides_hints_until_a_code_is_entered() {
        let html = render(DrivePanelProps {
            last_code: AttrValue::default(),
            recent: RecentCodes::new(),
            info: None,
            notice: None,
            on_submit: Callback::noop(),
        });
        assert!(html.contains("Interactive USB Flash Drive"));
        assert!(!html.contains("Codes to try:"));
        assert!(!html.contains("Recent codes:"));
    }

    #[test]
    fn a_submission_reveals_hints_info_and_history() {
        let mut recent = RecentCodes::new();
        recent.record("1300");
        let html = render(DrivePanelProps {
            last_code: AttrValue::from("1300"),
            recent,
            info: Some(classify("1300")),
            notice: None,
            on_submit: Callback::noop(),
        });
        assert!(html.contains("Codes to try:"));
        assert!(html.contains("Recent codes:"));
        assert!(html.contains("Paranormal File"));
    }

    #[test]
    fn the_unknown_notice_is_an_alert() {
        let mut recent = RecentCodes::new();
        recent.record("9999");
        let html = render(DrivePanelProps {
            last_code: AttrValue::from("9999"),
            recent,
            info: None,
            notice: Some(AttrValue::from("Unknown code: 9999")),
            on_submit: Callback::noop(),
        });
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Unknown code: 9999"));
    }
}
