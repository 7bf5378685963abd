//! Panel Configuration
//!
//! Toast wording and form defaults. Every field has a default, so an empty
//! JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::PaymentType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    pub error_title: String,
    pub success_title: String,
    pub select_account_first: String,
    pub missing_fields: String,
    pub payment_created: String,
    /// Shown when a failed create carries no server message
    pub create_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            error_title: "Error".to_string(),
            success_title: "Success".to_string(),
            select_account_first: "Please select an Account first.".to_string(),
            missing_fields: "Please fill in all required fields.".to_string(),
            payment_created: "Payment created successfully.".to_string(),
            create_failed: "Error creating payment.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    pub default_payment_type: PaymentType,
    pub messages: Messages,
}

impl PanelConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject blank toast text
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.messages;
        let fields = [
            ("error_title", &m.error_title),
            ("success_title", &m.success_title),
            ("select_account_first", &m.select_account_first),
            ("missing_fields", &m.missing_fields),
            ("payment_created", &m.payment_created),
            ("create_failed", &m.create_failed),
        ];
        match fields.iter().find(|(_, v)| v.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::Invalid(format!("messages.{name} must not be blank"))),
            None => Ok(()),
        }
    }
}
