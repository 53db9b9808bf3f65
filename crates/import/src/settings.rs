use pekao_core::AccountType;
use serde::Deserialize;

use crate::adapter::DEFAULT_DATE_FORMAT;
use crate::error::ImportError;

/// Per-file context the export does not carry itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PekaoSettings {
    /// Domestic account number; spaces allowed, `PL` is prepended.
    pub account_id: String,
    pub bank_id: String,
    /// Encoding label understood by `encoding_rs`.
    pub charset: String,
    pub currency: String,
    pub account_type: AccountType,
    pub date_format: String,
}

impl Default for PekaoSettings {
    fn default() -> Self {
        Self {
            account_id: "000000000000000000000000".to_string(),
            bank_id: "PKOPPLPW".to_string(),
            charset: "cp1250".to_string(),
            currency: "PLN".to_string(),
            account_type: AccountType::Checking,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl PekaoSettings {
    pub fn from_toml(toml_content: &str) -> Result<Self, ImportError> {
        Ok(toml::from_str(toml_content)?)
    }

    /// IBAN-style id: `PL` followed by the account number without spaces.
    pub fn normalized_account_id(&self) -> String {
        let digits: String = self.account_id.chars().filter(|c| *c != ' ').collect();
        format!("PL{digits}")
    }
}
