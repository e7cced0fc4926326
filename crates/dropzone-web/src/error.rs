//! Errors raised while attaching the widget or talking to the browser.

use wasm_bindgen::JsValue;

/// Errors that can occur when attaching the widget or sending an upload.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The global `window` or `document` is unavailable.
    #[error("no global {0}")]
    NoGlobal(&'static str),

    /// The rendered template is missing an element it should contain.
    #[error("template element #{0} not found")]
    MissingElement(&'static str),

    /// The configuration could not be converted for script access.
    #[error("config serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<WidgetError> for JsValue {
    fn from(error: WidgetError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

/// The global `window`.
pub(crate) fn window() -> Result<web_sys::Window, WidgetError> {
    web_sys::window().ok_or(WidgetError::NoGlobal("window"))
}

/// The global `document`.
pub(crate) fn document() -> Result<web_sys::Document, WidgetError> {
    window()?.document().ok_or(WidgetError::NoGlobal("document"))
}
