//! Form State
//!
//! In-progress input for a new payment.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::model::PaymentType;

/// Input names the form binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    PaymentType,
    Amount,
    DueDate,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::PaymentType,
        FormField::Amount,
        FormField::DueDate,
        FormField::Notes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::PaymentType => "paymentType",
            FormField::Amount => "amount",
            FormField::DueDate => "dueDate",
            FormField::Notes => "notes",
        }
    }
}

impl FromStr for FormField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL.into_iter().find(|f| f.name() == s).ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentForm {
    pub payment_type: Option<PaymentType>,
    pub amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self::with_type(PaymentType::default())
    }
}

impl PaymentForm {
    /// Empty form with `payment_type` preselected
    pub fn with_type(payment_type: PaymentType) -> Self {
        Self {
            payment_type: Some(payment_type),
            amount: None,
            due_date: None,
            notes: None,
        }
    }

    /// Set one field from raw input.
    ///
    /// Unknown names are ignored. Blank input clears the field, and input
    /// that does not parse clears it too so the required-field check will
    /// reject the form. Notes are kept verbatim.
    pub fn set_field(&mut self, name: &str, value: &str) {
        let Ok(field) = name.parse::<FormField>() else {
            debug!(field = name, "ignoring unknown form field");
            return;
        };
        match field {
            FormField::PaymentType => self.payment_type = parse_or_clear(field, value),
            FormField::Amount => self.amount = parse_or_clear(field, value),
            FormField::DueDate => self.due_date = parse_or_clear(field, value),
            FormField::Notes => {
                self.notes = (!value.trim().is_empty()).then(|| value.to_string());
            }
        }
    }

    /// Clear every field and preselect `payment_type`
    pub fn reset(&mut self, payment_type: PaymentType) {
        *self = Self::with_type(payment_type);
    }

    /// The required values, or the first required field still empty
    pub fn required(&self) -> Result<(PaymentType, Decimal, NaiveDate), FormField> {
        let payment_type = self.payment_type.ok_or(FormField::PaymentType)?;
        let amount = self.amount.ok_or(FormField::Amount)?;
        let due_date = self.due_date.ok_or(FormField::DueDate)?;
        Ok((payment_type, amount, due_date))
    }
}

fn parse_or_clear<T>(field: FormField, value: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(field = field.name(), value, error = %err, "unparseable form input");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PaymentForm {
        let mut form = PaymentForm::default();
        form.set_field("paymentType", "Product");
        form.set_field("amount", "99.95");
        form.set_field("dueDate", "2026-12-01");
        form.set_field("notes", "first instalment");
        form
    }

    #[test]
    fn test_defaults() {
        let form = PaymentForm::default();
        assert_eq!(form.payment_type, Some(PaymentType::Service));
        assert!(form.amount.is_none());
        assert!(form.due_date.is_none());
        assert!(form.notes.is_none());
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let mut form = PaymentForm::default();
        form.set_field("amount", "12.5");

        let expected = PaymentForm {
            amount: Some(Decimal::new(125, 1)),
            ..PaymentForm::default()
        };
        assert_eq!(form, expected);
    }

    #[test]
    fn test_filled_form() {
        let form = filled();
        assert_eq!(form.payment_type, Some(PaymentType::Product));
        assert_eq!(form.amount, Some(Decimal::new(9995, 2)));
        assert_eq!(form.due_date, NaiveDate::from_ymd_opt(2026, 12, 1));
        assert_eq!(form.notes.as_deref(), Some("first instalment"));
        assert!(form.required().is_ok());
    }

    // Unknown names are accepted and dropped rather than rejected.
    #[test]
    fn test_unknown_field_name_is_ignored() {
        let mut form = filled();
        form.set_field("colour", "blue");
        assert_eq!(form, filled());
    }

    #[test]
    fn test_blank_and_invalid_input_clear_field() {
        let mut form = filled();
        form.set_field("amount", "  ");
        assert!(form.amount.is_none());

        form.set_field("dueDate", "next tuesday");
        assert!(form.due_date.is_none());

        form.set_field("paymentType", "");
        assert_eq!(form.required().err(), Some(FormField::PaymentType));
    }

    #[test]
    fn test_required_reports_first_missing_field() {
        let mut form = PaymentForm::default();
        assert_eq!(form.required().err(), Some(FormField::Amount));
        form.set_field("amount", " 1 ");
        assert_eq!(form.required().err(), Some(FormField::DueDate));
        form.set_field("dueDate", "2026-01-31");
        assert_eq!(
            form.required(),
            Ok((
                PaymentType::Service,
                Decimal::ONE,
                NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
            ))
        );
    }

    #[test]
    fn test_notes_are_optional() {
        let mut form = filled();
        form.set_field("notes", "");
        assert!(form.notes.is_none());
        form.set_field("notes", "  \n ");
        assert!(form.notes.is_none());
        assert!(form.required().is_ok());
    }

    #[test]
    fn test_notes_keep_surrounding_whitespace() {
        let mut form = PaymentForm::default();
        form.set_field("notes", "  line one\nline two\n");
        assert_eq!(form.notes.as_deref(), Some("  line one\nline two\n"));
    }

    #[test]
    fn test_reset_clears_and_preselects_type() {
        let mut form = filled();
        form.reset(PaymentType::Service);
        assert_eq!(form, PaymentForm::default());

        let mut form = filled();
        form.reset(PaymentType::Other);
        assert_eq!(form, PaymentForm::with_type(PaymentType::Other));
    }
}
