use std::collections::BTreeMap;

use log::{info, warn};
use serde::Deserialize;

use crate::config;
use crate::error::CatalogError;
use crate::storage::PreferenceStore;

const BUNDLED: &str = include_str!("../assets/translations.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatLine {
    pub sender: String,
    pub time: String,
    pub text: String,
}

impl ChatLine {
    /// Keith answers on the right; everybody else is "you".
    pub fn is_reply(&self) -> bool {
        self.sender == "Keith"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tip {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Translation {
    pub lang: String,
    pub flag: String,
    #[serde(default)]
    pub chat_bad: Vec<ChatLine>,
    #[serde(default)]
    pub chat_good: Vec<ChatLine>,
    pub chat_waiting: String,
    pub copy_btn: String,
    pub copied_btn: String,
    pub share_copy: String,
    pub share_copied: String,
    #[serde(default)]
    pub tips: Vec<Tip>,
    #[serde(default)]
    pub templates: Vec<String>,
    /// Plain page strings, addressed by key.
    #[serde(flatten)]
    pub strings: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    languages: BTreeMap<String, Translation>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The catalog compiled into the binary. A broken file degrades to an
    /// empty catalog, leaving every lookup to fall back to its key.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED).unwrap_or_else(|err| {
            warn!("{}", err);
            Self::default()
        })
    }

    pub fn lookup(&self, code: &str) -> Option<&Translation> {
        self.languages.get(code)
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// `code`'s translation, else the default language's.
    pub fn translation(&self, code: &str) -> Option<&Translation> {
        self.lookup(code)
            .or_else(|| self.lookup(config::DEFAULT_LANG))
    }

    pub fn text<'a>(&'a self, code: &str, key: &'a str) -> &'a str {
        self.lookup(code)
            .and_then(|t| t.strings.get(key))
            .or_else(|| {
                self.lookup(config::DEFAULT_LANG)
                    .and_then(|t| t.strings.get(key))
            })
            .map(String::as_str)
            .unwrap_or(key)
    }
}

/// The selected language, passed down from the app root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangState {
    code: String,
}

impl Default for LangState {
    fn default() -> Self {
        Self {
            code: config::DEFAULT_LANG.to_string(),
        }
    }
}

impl LangState {
    pub fn restore(store: &dyn PreferenceStore, catalog: &Catalog) -> Self {
        match store.load(config::STORAGE_KEY) {
            Some(code) if catalog.is_supported(&code) => Self { code },
            _ => Self::default(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Switches and persists. Unsupported codes leave everything as it was.
    pub fn select(&mut self, code: &str, store: &dyn PreferenceStore, catalog: &Catalog) -> bool {
        if !catalog.is_supported(code) {
            return false;
        }
        info!("language -> {}", code);
        self.code = code.to_string();
        store.save(config::STORAGE_KEY, code);
        true
    }
}
