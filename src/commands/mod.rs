//! Tauri Command Wrappers
//!
//! Frontend bindings to the backend's account and payment commands,
//! organized by domain.

mod account;
mod error;
mod payment;

use async_trait::async_trait;
use payments_core::{Account, AccountId, NewPayment, Payment, PaymentsApi, RemoteError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use account::*;
pub use error::*;
pub use payment::*;

/// `PaymentsApi` over Tauri IPC
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriApi;

#[async_trait(?Send)]
impl PaymentsApi for TauriApi {
    async fn fetch_accounts(&self) -> Result<Vec<Account>, RemoteError> {
        get_accounts().await
    }

    async fn fetch_payments(&self, account_id: &AccountId) -> Result<Vec<Payment>, RemoteError> {
        get_payments_by_account(account_id).await
    }

    async fn create_payment(&self, payment: NewPayment) -> Result<(), RemoteError> {
        create_payment(&payment).await
    }
}
