use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring behavior onto the rendered page.
///
/// None of these reach the user; callers log them and carry on.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("no browser window")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WireError {
    fn from(value: JsValue) -> Self {
        WireError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid translation catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_and_elements_are_reported_apart() {
        assert_eq!(WireError::NoWindow.to_string(), "no browser window");
        assert_eq!(
            WireError::MissingElement("chat-wrong").to_string(),
            "element not found: chat-wrong"
        );
    }
}
