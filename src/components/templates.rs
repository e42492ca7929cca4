use yew::prelude::*;

use crate::copy::{BrowserClipboard, CopyButton, CopyLabel};
use crate::schedule::TimerScheduler;

#[derive(Properties, PartialEq)]
pub struct TemplateCardProps {
    pub text: String,
    pub copy_label: String,
    pub copied_label: String,
}

#[function_component(TemplateCard)]
pub fn template_card(props: &TemplateCardProps) -> Html {
    let label = use_state(CopyLabel::default);

    let onclick = {
        let text = props.text.clone();
        let label = label.setter();
        Callback::from(move |_: MouseEvent| {
            let button = CopyButton::new(BrowserClipboard, TimerScheduler);
            let label = label.clone();
            button.press(&text, move |next| label.set(next));
        })
    };

    html! {
        <div class="tpl-card reveal">
            <p class="tpl-msg">{props.text.as_str()}</p>
            <button
                class={classes!("copy-btn", (*label == CopyLabel::Copied).then_some("copied"))}
                {onclick}
            >
                {label.pick(&props.copy_label, &props.copied_label)}
            </button>
        </div>
    }
}
