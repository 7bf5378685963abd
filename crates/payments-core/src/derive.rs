//! Presentation Derivations
//!
//! Read-only projections of panel state. No side effects.

use crate::model::Payment;
use crate::query::QueryResult;
use crate::selection::Selection;

pub fn has_selection(selection: &Option<Selection>) -> bool {
    selection.is_some()
}

/// True only once a selected account's payments resolved to zero rows
pub fn is_empty(has_selection: bool, payments: &QueryResult<Payment>) -> bool {
    has_selection && matches!(payments.data(), Some(rows) if rows.is_empty())
}

/// Heading for the payments list
pub fn payments_heading(selection: &Option<Selection>) -> Option<String> {
    selection.as_ref().map(|s| format!("Payments for {}", s.label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use crate::model::{AccountId, PaymentType};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn payment() -> Payment {
        Payment {
            payment_type: PaymentType::Service,
            amount: Decimal::new(100, 0),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            notes: None,
            account_id: AccountId::new("001"),
        }
    }

    #[test]
    fn test_is_empty_matrix() {
        let empty = QueryResult::<Payment>::empty();
        let some = QueryResult::Success(vec![payment()]);
        let pending = QueryResult::<Payment>::Pending;
        let failed = QueryResult::<Payment>::Failure(RemoteError::opaque());

        assert!(is_empty(true, &empty));
        assert!(!is_empty(false, &empty));
        assert!(!is_empty(true, &some));
        assert!(!is_empty(true, &pending));
        assert!(!is_empty(true, &failed));
    }

    #[test]
    fn test_heading() {
        let selection = Some(Selection {
            id: AccountId::new("001"),
            label: "Acme".to_string(),
        });
        assert!(has_selection(&selection));
        assert_eq!(payments_heading(&selection).as_deref(), Some("Payments for Acme"));
        assert_eq!(payments_heading(&None), None);
    }
}
