use thiserror::Error;
use wasm_bindgen::JsValue;

/// Raised while looking up the page and wiring a controller.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },
    #[error("element `{selector}` is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },
    #[error("lookup of `{selector}` failed: {reason}")]
    Lookup { selector: String, reason: String },
    #[error("could not listen for `{event}` on `{target}`: {reason}")]
    Listener {
        event: &'static str,
        target: String,
        reason: String,
    },
    #[error("invalid landing config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// A call into the browser failed while handling an event.
#[derive(Debug, Error)]
#[error("host call failed: {0}")]
pub struct HostError(pub String);

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError(describe(&value))
    }
}

pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
