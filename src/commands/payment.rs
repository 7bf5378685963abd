//! Payment Commands
//!
//! Frontend bindings for payment-related backend commands.

use payments_core::{AccountId, NewPayment, Payment, RemoteError};
use serde::Serialize;

use super::{invoke, remote_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AccountIdArgs<'a> {
    #[serde(rename = "accountId")]
    account_id: &'a str,
}

#[derive(Serialize)]
struct CreatePaymentArgs<'a> {
    payment: &'a NewPayment,
}

// ========================
// Commands
// ========================

pub async fn get_payments_by_account(account_id: &AccountId) -> Result<Vec<Payment>, RemoteError> {
    let js_args = serde_wasm_bindgen::to_value(&AccountIdArgs { account_id: account_id.as_str() })
        .map_err(|e| RemoteError::new(e.to_string()))?;
    let result = invoke("get_payments_by_account", js_args).await.map_err(remote_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| RemoteError::new(e.to_string()))
}

pub async fn create_payment(payment: &NewPayment) -> Result<(), RemoteError> {
    let js_args = serde_wasm_bindgen::to_value(&CreatePaymentArgs { payment })
        .map_err(|e| RemoteError::new(e.to_string()))?;
    // Result is () on success
    invoke("create_payment", js_args).await.map_err(remote_error)?;
    Ok(())
}
