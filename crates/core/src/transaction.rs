use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::id::generate_transaction_id;
use super::money::Money;

/// Coarse OFX `TRNTYPE` derived from the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "DEP")]
    Deposit,
    #[serde(rename = "DEBIT")]
    Debit,
    #[serde(rename = "OTHER")]
    Other,
}

impl TransactionType {
    pub fn from_amount(amount: Money) -> Self {
        if amount.is_positive() {
            TransactionType::Deposit
        } else if amount.is_negative() {
            TransactionType::Debit
        } else {
            TransactionType::Other
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEP",
            TransactionType::Debit => "DEBIT",
            TransactionType::Other => "OTHER",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized content of one exported row, before it is numbered and identified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDetails {
    pub posting_date: Option<NaiveDate>,
    pub value_date: Option<NaiveDate>,
    pub payee: String,
    pub counterparty_account: String,
    pub memo: String,
    pub amount: Money,
    pub currency: String,
}

/// Normalized Transaction Record handed to the statement container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    pub id: String,
    /// 1-based row counter, used as the reference number.
    pub refnum: String,
    pub transaction_type: TransactionType,
    pub posting_date: Option<NaiveDate>,
    pub value_date: Option<NaiveDate>,
    pub payee: String,
    pub counterparty_account: String,
    pub memo: String,
    pub amount: Money,
    pub currency: String,
}

impl StatementLine {
    pub fn new(details: LineDetails, row_num: usize) -> Self {
        let id = generate_transaction_id(&details);
        StatementLine {
            id,
            refnum: row_num.to_string(),
            transaction_type: TransactionType::from_amount(details.amount),
            posting_date: details.posting_date,
            value_date: details.value_date,
            payee: details.payee,
            counterparty_account: details.counterparty_account,
            memo: details.memo,
            amount: details.amount,
            currency: details.currency,
        }
    }

    /// Posting date, or the value date when the row has no posting date.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.posting_date.or(self.value_date)
    }
}
