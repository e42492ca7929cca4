use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::Catalog;

#[derive(Properties, PartialEq)]
pub struct LanguagePickerProps {
    pub catalog: Rc<Catalog>,
    pub current: String,
    pub on_select: Callback<String>,
}

#[function_component(LanguagePicker)]
pub fn language_picker(props: &LanguagePickerProps) -> Html {
    let LanguagePickerProps {
        catalog,
        current,
        on_select,
    } = props;
    let open = use_state(|| false);

    // Any click that reaches the document closes the dropdown.
    {
        let open = open.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let close = Closure::<dyn Fn()>::new(move || open.set(false));
                if let Some(document) = &document {
                    let _ = document
                        .add_event_listener_with_callback("click", close.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            close.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open.set(!*open);
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let current_flag = catalog
        .lookup(current)
        .map(|t| t.flag.clone())
        .unwrap_or_default();

    html! {
        <div class="lang-picker">
            <button
                id="lang-toggle"
                class="lang-toggle"
                aria-label={catalog.text(current, "picker_label").to_string()}
                onclick={toggle}
            >
                <span id="lang-current-flag">{current_flag}</span>
                <span id="lang-current-name">{current.to_uppercase()}</span>
            </button>
            <div
                id="lang-dropdown"
                class={classes!("lang-dropdown", (*open).then_some("open"))}
                onclick={keep_open}
            >
                { for catalog.codes().filter_map(|code| catalog.lookup(code).map(|t| (code, t))).map(|(code, t)| {
                    let onclick = {
                        let open = open.clone();
                        let on_select = on_select.clone();
                        let code = code.to_string();
                        Callback::from(move |_: MouseEvent| {
                            on_select.emit(code.clone());
                            open.set(false);
                        })
                    };
                    html! {
                        <button
                            class={classes!("lang-option", (code == current.as_str()).then_some("active"))}
                            data-lang={code.to_string()}
                            {onclick}
                        >
                            {format!("{} {}", t.flag, t.lang)}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
