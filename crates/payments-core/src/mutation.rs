//! Create Payment Command
//!
//! Validate, create once, then reset the form and refresh the payments list.
//! A failed create leaves every piece of state as it was so the user can
//! retry. There is no automatic retry.

use tracing::{debug, info, warn};

use crate::error::{PanelError, PanelResult, ValidationError};
use crate::form::PaymentForm;
use crate::model::{AccountId, NewPayment};
use crate::notify::{Severity, Toast};
use crate::panel::PaymentsPanel;

/// Build the create payload, or say why the input is not ready
pub fn build_payload(
    account_id: Option<AccountId>,
    form: &PaymentForm,
) -> Result<NewPayment, ValidationError> {
    let account_id = account_id.ok_or(ValidationError::NoSelection)?;
    let (payment_type, amount, due_date) = form.required().map_err(|field| {
        debug!(field = field.name(), "required field empty");
        ValidationError::MissingFields
    })?;
    Ok(NewPayment {
        account_id,
        payment_type,
        amount,
        due_date,
        notes: form.notes.clone(),
    })
}

impl PaymentsPanel {
    /// Submit the form as a new payment for the selected account.
    ///
    /// Outcomes are also reported through the notifier.
    pub async fn submit(&self) -> PanelResult<()> {
        let messages = &self.config.messages;

        let payload = match build_payload(self.selection.selected_id(), &self.form.get()) {
            Ok(payload) => payload,
            Err(err) => {
                debug!(%err, "payment rejected before submit");
                let text = match err {
                    ValidationError::NoSelection => &messages.select_account_first,
                    ValidationError::MissingFields => &messages.missing_fields,
                };
                self.notifier
                    .notify(Toast::new(&messages.error_title, text, Severity::Error));
                return Err(err.into());
            }
        };

        let account_id = payload.account_id.clone();
        match self.api.create_payment(payload).await {
            Ok(()) => {
                info!(%account_id, "payment created");
                self.notifier.notify(Toast::new(
                    &messages.success_title,
                    &messages.payment_created,
                    Severity::Success,
                ));
                self.reset_form();
                self.payments.invalidate();
                Ok(())
            }
            Err(err) => {
                warn!(%account_id, error = %err, "payment create failed");
                self.notifier.notify(Toast::new(
                    &messages.error_title,
                    err.message_or(&messages.create_failed),
                    Severity::Error,
                ));
                Err(PanelError::RemoteMutation(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentType;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn complete_form() -> PaymentForm {
        PaymentForm {
            payment_type: Some(PaymentType::Other),
            amount: Some(Decimal::new(4200, 2)),
            due_date: NaiveDate::from_ymd_opt(2026, 6, 30),
            notes: Some("deposit".to_string()),
        }
    }

    #[test]
    fn test_no_selection_checked_first() {
        let err = build_payload(None, &PaymentForm::default()).unwrap_err();
        assert_eq!(err, ValidationError::NoSelection);
    }

    #[test]
    fn test_missing_amount() {
        let form = PaymentForm {
            amount: None,
            ..complete_form()
        };
        let err = build_payload(Some(AccountId::new("001")), &form).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[test]
    fn test_missing_type() {
        let form = PaymentForm {
            payment_type: None,
            ..complete_form()
        };
        assert_eq!(
            build_payload(Some(AccountId::new("001")), &form),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_payload_carries_selection_and_form() {
        let payload = build_payload(Some(AccountId::new("001")), &complete_form()).unwrap();
        assert_eq!(
            payload,
            NewPayment {
                account_id: AccountId::new("001"),
                payment_type: PaymentType::Other,
                amount: Decimal::new(4200, 2),
                due_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
                notes: Some("deposit".to_string()),
            }
        );
    }
}
