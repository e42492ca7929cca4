use urlencoding::encode;
use web_sys::window;

use crate::config;
use crate::error::WireError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Twitter,
    LinkedIn,
}

impl ShareTarget {
    /// Id of the button that opens this target.
    pub fn element_id(self) -> &'static str {
        match self {
            ShareTarget::Twitter => "share-twitter",
            ShareTarget::LinkedIn => "share-linkedin",
        }
    }
}

pub fn share_url(target: ShareTarget, url: &str, text: &str) -> String {
    match target {
        ShareTarget::Twitter => format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encode(text),
            encode(url)
        ),
        ShareTarget::LinkedIn => format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encode(url)
        ),
    }
}

/// Opens the share endpoint for the page in a popup.
pub fn open_share(target: ShareTarget) -> Result<(), WireError> {
    let window = window().ok_or(WireError::NoWindow)?;
    let url = share_url(target, config::SHARE_URL, config::SHARE_TEXT);
    window.open_with_url_and_target_and_features(&url, "_blank", config::SHARE_POPUP_FEATURES)?;
    Ok(())
}
