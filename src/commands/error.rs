//! IPC Error Decoding
//!
//! Rejections arrive either as a bare string (Tauri `Result<_, String>`
//! commands) or as an object carrying `message` or `body.message`.

use payments_core::RemoteError;
use serde::Deserialize;
use wasm_bindgen::JsValue;

#[derive(Debug, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub body: Option<ErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorPayload {
    /// `body.message` wins over a top-level `message`
    pub fn into_remote_error(self) -> RemoteError {
        self.body
            .and_then(|b| b.message)
            .or(self.message)
            .map(RemoteError::new)
            .unwrap_or_else(RemoteError::opaque)
    }
}

/// Convert a rejected `invoke` into a `RemoteError`
pub fn remote_error(err: JsValue) -> RemoteError {
    if let Some(text) = err.as_string() {
        return RemoteError::new(text);
    }
    serde_wasm_bindgen::from_value::<ErrorPayload>(err)
        .map(ErrorPayload::into_remote_error)
        .unwrap_or_else(|_| RemoteError::opaque())
}
