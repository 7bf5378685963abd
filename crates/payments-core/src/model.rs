//! Records
//!
//! Accounts are the selectable parent records, payments the dependent child
//! records. Serde names follow the remote record fields.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque account identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Account row as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "Id")]
    pub id: AccountId,
    #[serde(rename = "Name")]
    pub name: String,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(id),
            name: name.into(),
        }
    }
}

/// Payment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentType {
    #[default]
    Service,
    Product,
    Other,
}

impl PaymentType {
    /// Options offered by the form, in display order
    pub const ALL: [PaymentType; 3] = [PaymentType::Service, PaymentType::Product, PaymentType::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Service => "Service",
            PaymentType::Product => "Product",
            PaymentType::Other => "Other",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised payment type name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment type `{0}`")]
pub struct UnknownPaymentType(pub String);

impl FromStr for PaymentType {
    type Err = UnknownPaymentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPaymentType(s.to_string()))
    }
}

/// Payment row belonging to exactly one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "Payment_Type__c")]
    pub payment_type: PaymentType,
    #[serde(rename = "Amount__c")]
    pub amount: Decimal,
    #[serde(rename = "Due_Date__c")]
    pub due_date: NaiveDate,
    #[serde(rename = "Notes__c", default)]
    pub notes: Option<String>,
    #[serde(rename = "Account__c")]
    pub account_id: AccountId,
}

/// Create payload; the server assigns everything else
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayment {
    #[serde(rename = "Account__c")]
    pub account_id: AccountId,
    #[serde(rename = "Payment_Type__c")]
    pub payment_type: PaymentType,
    #[serde(rename = "Amount__c")]
    pub amount: Decimal,
    #[serde(rename = "Due_Date__c")]
    pub due_date: NaiveDate,
    #[serde(rename = "Notes__c")]
    pub notes: Option<String>,
}
