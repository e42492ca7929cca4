use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod copy;
mod dom;
mod error;
mod i18n;
mod reveal;
mod schedule;
mod share;
mod storage;
mod components {
    pub mod chat;
    pub mod language_picker;
    pub mod share_bar;
    pub mod templates;
}
mod pages {
    pub mod home;
}

use components::language_picker::LanguagePicker;
use i18n::{Catalog, LangState};
use pages::home::Home;
use storage::LocalStore;

const STYLE: &str = include_str!("../assets/style.css");

#[function_component]
fn App() -> Html {
    let catalog = use_memo(|_| Catalog::bundled(), ());
    let lang = {
        let catalog = catalog.clone();
        use_state(move || LangState::restore(&LocalStore, &catalog))
    };

    let on_select = {
        let lang = lang.clone();
        let catalog = catalog.clone();
        Callback::from(move |code: String| {
            let mut next = (*lang).clone();
            if next.select(&code, &LocalStore, &catalog) {
                lang.set(next);
            }
        })
    };

    html! {
        <>
            <style>{STYLE}</style>
            <nav class="top-nav">
                <span class="nav-logo">{"YesHello"}</span>
                <LanguagePicker
                    catalog={Rc::clone(&catalog)}
                    current={lang.code().to_string()}
                    {on_select}
                />
            </nav>
            <Home catalog={Rc::clone(&catalog)} lang={lang.code().to_string()} />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
