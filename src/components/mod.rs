//! UI Components
//!
//! Leptos components for the account payments panel.

mod account_table;
mod new_payment_form;
mod payment_table;
mod toast_host;
mod type_selector;

pub use account_table::AccountTable;
pub use new_payment_form::NewPaymentForm;
pub use payment_table::PaymentTable;
pub use toast_host::ToastHost;
pub use type_selector::TypeSelector;
