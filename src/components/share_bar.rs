use log::debug;
use yew::prelude::*;

use crate::config;
use crate::copy::{BrowserClipboard, CopyButton, CopyLabel};
use crate::schedule::TimerScheduler;
use crate::share::{open_share, ShareTarget};

#[derive(Properties, PartialEq)]
pub struct ShareBarProps {
    pub twitter_label: String,
    pub linkedin_label: String,
    pub copy_label: String,
    pub copied_label: String,
}

fn share_link(target: ShareTarget, label: &str) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = open_share(target) {
            debug!("share popup failed: {}", err);
        }
    });
    html! {
        <a href="#" id={target.element_id()} class="share-btn" {onclick}>{label}</a>
    }
}

#[function_component(ShareBar)]
pub fn share_bar(props: &ShareBarProps) -> Html {
    let label = use_state(CopyLabel::default);

    let copy_link = {
        let label = label.setter();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let label = label.clone();
            CopyButton::new(BrowserClipboard, TimerScheduler)
                .press(config::SHARE_URL, move |next| label.set(next));
        })
    };

    html! {
        <div class="share-buttons">
            { share_link(ShareTarget::Twitter, &props.twitter_label) }
            { share_link(ShareTarget::LinkedIn, &props.linkedin_label) }
            <a href="#" id="share-copy" class="share-btn" onclick={copy_link}>
                {label.pick(&props.copy_label, &props.copied_label)}
            </a>
        </div>
    }
}
