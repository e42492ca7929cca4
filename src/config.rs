use log::Level;

pub const STORAGE_KEY: &str = "yeshello-lang";
pub const DEFAULT_LANG: &str = "en";

pub const REVEAL_THRESHOLD: f64 = 0.15;
// Coarser than the reveal threshold so the chat is well in view before it plays.
pub const PANEL_THRESHOLD: f64 = 0.2;

pub const WRONG_PANEL_DELAYS: [u32; 7] = [300, 900, 2000, 3800, 5000, 6200, 7400];
pub const RIGHT_PANEL_DELAYS: [u32; 2] = [300, 1500];
pub const FALLBACK_STEP_MS: u32 = 1200;
pub const WAITING_SHOW_MS: u32 = 1400;
pub const WAITING_HIDE_MS: u32 = 3600;

pub const COPY_RESET_MS: u32 = 2000;

pub const SHARE_URL: &str = "https://yeshello.info";
pub const SHARE_TEXT: &str = "Say hello the right way 👋 — yeshello.info";
pub const SHARE_POPUP_FEATURES: &str = "width=550,height=420";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
