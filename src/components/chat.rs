use yew::prelude::*;

use crate::i18n::ChatLine;

// The waiting indicator sits after this many messages in the bad chat.
const WAITING_AFTER: usize = 2;

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub id: &'static str,
    pub body_id: &'static str,
    pub title: String,
    pub caption: String,
    pub lines: Vec<ChatLine>,
    #[prop_or_default]
    pub waiting: Option<String>,
    #[prop_or_default]
    pub good: bool,
}

fn render_line(line: &ChatLine) -> Html {
    let (avatar, letter) = if line.is_reply() { ("b", "K") } else { ("a", "Y") };
    html! {
        <div class="msg">
            <div class={format!("msg-avatar msg-avatar--{}", avatar)}>{letter}</div>
            <div>
                <div class="msg-name">
                    {line.sender.as_str()}{" "}
                    <span class="msg-time">{line.time.as_str()}</span>
                </div>
                <div class="msg-text">{line.text.as_str()}</div>
            </div>
        </div>
    }
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let waiting = props.waiting.as_ref().map(|text| {
        html! {
            <div class="waiting" id="chat-waiting">
                <span class="waiting-dots"><span></span><span></span><span></span></span>
                <span>{text.as_str()}</span>
            </div>
        }
    });

    html! {
        <div id={props.id} class={classes!("chat-panel", props.good.then_some("chat-panel--good"))}>
            <div class="chat-header">{props.title.as_str()}</div>
            <div id={props.body_id} class="chat-body">
                { for props.lines.iter().enumerate().map(|(i, line)| html! {
                    <>
                        { render_line(line) }
                        { if i + 1 == WAITING_AFTER { waiting.clone().unwrap_or_else(|| html! {}) } else { html! {} } }
                    </>
                }) }
            </div>
            <div class="chat-caption">{props.caption.as_str()}</div>
        </div>
    }
}
