use std::rc::Rc;

use log::{debug, info};
use web_sys::window;
use yew::prelude::*;

use crate::components::chat::ChatPanel;
use crate::components::share_bar::ShareBar;
use crate::components::templates::TemplateCard;
use crate::dom::{wire_chat, wire_reveals};
use crate::i18n::Catalog;
use crate::schedule::TimerScheduler;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub catalog: Rc<Catalog>,
    pub lang: String,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Observers are wired once, against the first render.
    {
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(document) = window().and_then(|w| w.document()) {
                    match wire_reveals(&document) {
                        Ok(handle) => handles.push(handle),
                        Err(err) => debug!("reveal skipped: {}", err),
                    }
                    match wire_chat(&document, TimerScheduler) {
                        Ok(handle) => handles.push(handle),
                        Err(err) => debug!("chat animation skipped: {}", err),
                    }
                }
                info!("page wired with {} observers", handles.len());
                move || {
                    for handle in handles {
                        handle.disconnect();
                    }
                }
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            move |lang: &String| {
                if let Some(root) = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", lang);
                }
                || ()
            },
            props.lang.clone(),
        );
    }

    let catalog = &props.catalog;
    let lang = props.lang.as_str();
    let text = |key: &'static str| catalog.text(lang, key).to_string();
    let Some(t) = catalog.translation(lang) else {
        return html! {};
    };

    html! {
        <main class="page">
            <header class="hero">
                <span class="hero-badge">{text("hero_badge")}</span>
                <h1>{text("hero_title")}</h1>
                <p class="hero-subtitle">{text("hero_subtitle")}</p>
                <a href="#problem" class="hero-cta">{text("hero_cta")}</a>
            </header>

            <section id="problem" class="section reveal">
                <h2>{text("problem_title")}</h2>
                <p>{text("problem_text")}</p>
            </section>

            <section class="section chats">
                <ChatPanel
                    id="chat-wrong"
                    body_id="chat-bad-body"
                    title={text("chat_bad_title")}
                    caption={text("chat_bad_caption")}
                    lines={t.chat_bad.clone()}
                    waiting={Some(t.chat_waiting.clone())}
                />
                <ChatPanel
                    id="chat-right"
                    body_id="chat-good-body"
                    title={text("chat_good_title")}
                    caption={text("chat_good_caption")}
                    lines={t.chat_good.clone()}
                    good={true}
                />
            </section>

            <section class="section tips reveal">
                <h2>{text("tips_title")}</h2>
                <ol class="tip-list">
                    { for t.tips.iter().map(|tip| html! {
                        <li class="tip">
                            <h3>{tip.title.as_str()}</h3>
                            <p>{tip.desc.as_str()}</p>
                        </li>
                    }) }
                </ol>
            </section>

            <section class="section templates">
                <h2 class="reveal">{text("templates_title")}</h2>
                <p class="reveal">{text("templates_subtitle")}</p>
                <div class="tpl-grid">
                    { for t.templates.iter().map(|template| html! {
                        <TemplateCard
                            text={template.clone()}
                            copy_label={t.copy_btn.clone()}
                            copied_label={t.copied_btn.clone()}
                        />
                    }) }
                </div>
            </section>

            <section class="section share reveal">
                <h2>{text("share_title")}</h2>
                <p>{text("share_text")}</p>
                <ShareBar
                    twitter_label={text("share_twitter")}
                    linkedin_label={text("share_linkedin")}
                    copy_label={t.share_copy.clone()}
                    copied_label={t.share_copied.clone()}
                />
            </section>

            <footer class="footer">
                <p>{text("footer_text")}</p>
            </footer>
        </main>
    }
}
