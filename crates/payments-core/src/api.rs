//! Remote Collaborators
//!
//! The data-access surface the panel consumes. Implementations own the wire
//! format; the panel only sees records and `RemoteError`.

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::model::{Account, AccountId, NewPayment, Payment};

/// Account and payment data access
///
/// Futures are `!Send`: the panel runs on a single-threaded event loop.
#[async_trait(?Send)]
pub trait PaymentsApi {
    /// All selectable accounts, in server order
    async fn fetch_accounts(&self) -> Result<Vec<Account>, RemoteError>;

    /// Payments belonging to one account
    async fn fetch_payments(&self, account_id: &AccountId) -> Result<Vec<Payment>, RemoteError>;

    /// Persist a new payment
    async fn create_payment(&self, payment: NewPayment) -> Result<(), RemoteError>;
}
