//! Account Commands
//!
//! Frontend bindings for account-related backend commands.

use payments_core::{Account, RemoteError};
use wasm_bindgen::prelude::*;

use super::{invoke, remote_error};

// ========================
// Commands
// ========================

pub async fn get_accounts() -> Result<Vec<Account>, RemoteError> {
    let result = invoke("get_accounts", JsValue::NULL).await.map_err(remote_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| RemoteError::new(e.to_string()))
}
