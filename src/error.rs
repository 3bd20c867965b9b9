use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeleteError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("No global window")]
    NoWindow,
}

impl DeleteError {
    pub fn transport(err: JsValue) -> Self {
        Self::Transport(format!("{:?}", err))
    }

    pub fn body(err: JsValue) -> Self {
        Self::Body(format!("{:?}", err))
    }
}
