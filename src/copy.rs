use log::warn;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::config;
use crate::schedule::Scheduler;

pub trait ClipboardWriter {
    /// Writes `text` and later calls `done` with whether the write succeeded.
    fn write_text(&self, text: &str, done: Box<dyn FnOnce(bool)>);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserClipboard;

impl ClipboardWriter for BrowserClipboard {
    fn write_text(&self, text: &str, done: Box<dyn FnOnce(bool)>) {
        let Some(window) = web_sys::window() else {
            done(false);
            return;
        };
        let promise = window.navigator().clipboard().write_text(text);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => done(true),
                Err(err) => {
                    warn!("clipboard write rejected: {:?}", err);
                    done(false);
                }
            }
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Idle,
    Copied,
}

impl CopyLabel {
    pub fn pick<'a>(self, idle: &'a str, copied: &'a str) -> &'a str {
        match self {
            CopyLabel::Idle => idle,
            CopyLabel::Copied => copied,
        }
    }
}

/// Copy-to-clipboard with a transient "copied" label.
#[derive(Clone)]
pub struct CopyButton<C, S> {
    clipboard: C,
    scheduler: S,
    reset_ms: u32,
}

impl<C, S> CopyButton<C, S>
where
    C: ClipboardWriter,
    S: Scheduler + Clone + 'static,
{
    pub fn new(clipboard: C, scheduler: S) -> Self {
        Self {
            clipboard,
            scheduler,
            reset_ms: config::COPY_RESET_MS,
        }
    }

    /// Returns false without touching the clipboard when there is nothing to copy.
    pub fn press<F>(&self, text: &str, on_label: F) -> bool
    where
        F: Fn(CopyLabel) + Clone + 'static,
    {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let scheduler = self.scheduler.clone();
        let reset_ms = self.reset_ms;
        self.clipboard.write_text(
            text,
            Box::new(move |ok| {
                if !ok {
                    return;
                }
                on_label(CopyLabel::Copied);
                scheduler.schedule(reset_ms, Box::new(move || on_label(CopyLabel::Idle)));
            }),
        );
        true
    }
}
