use chrono::NaiveDate;
use pekao_core::{LineDetails, Money, StatementLine};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{FieldError, ImportError};
use crate::header::{Field, HeaderIndex};
use crate::settings::PekaoSettings;

/// Layout of both date columns in real exports: `2024-01-05`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a comma-decimal amount such as `-1234,56`.
///
/// Only an optional sign, digits and one decimal separator are accepted;
/// digit grouping (`1 500,00`, `1_500,00`) and exponents (`1e3`) are not.
pub fn parse_amount(raw: &str) -> Result<Money, FieldError> {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if !digits.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.') {
        return Err(FieldError::InvalidAmount(raw.to_string()));
    }
    let normalized = raw.replace(',', ".");
    Decimal::from_str(&normalized)
        .map(Money::from_decimal)
        .map_err(|_| FieldError::InvalidAmount(raw.to_string()))
}

/// Empty input means the row has no such date.
pub fn parse_date(raw: &str, format: &str) -> Result<Option<NaiveDate>, FieldError> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, format)
        .map(Some)
        .map_err(|_| FieldError::InvalidDate(raw.to_string()))
}

/// Turns raw rows into statement lines through a resolved header.
///
/// Holds only shared references, so one adapter can serve several threads as
/// long as row numbers are assigned before dispatch.
#[derive(Debug, Clone, Copy)]
pub struct RowAdapter<'a> {
    header: &'a HeaderIndex,
    date_format: &'a str,
    currency: &'a str,
}

impl<'a> RowAdapter<'a> {
    pub fn new(header: &'a HeaderIndex, settings: &'a PekaoSettings) -> Self {
        RowAdapter {
            header,
            date_format: &settings.date_format,
            currency: &settings.currency,
        }
    }

    /// Adapt data row `row_num` (1-based, file order).
    pub fn adapt<S: AsRef<str>>(&self, row: &[S], row_num: usize) -> Result<StatementLine, ImportError> {
        let value = |field: Field| {
            self.header
                .get_value(row, field)
                .map_err(|e| e.at(row_num, field))
        };
        let date_user = value(Field::DateUser)?;
        let date = value(Field::Date)?;
        let payee = value(Field::Payee)?;
        let bank_account_to = value(Field::BankAccountTo)?;
        let memo = value(Field::Memo)?;
        let amount = value(Field::Amount)?;

        let amount = parse_amount(&amount).map_err(|e| e.at(row_num, Field::Amount))?;
        let posting_date =
            parse_date(&date_user, self.date_format).map_err(|e| e.at(row_num, Field::DateUser))?;
        let value_date =
            parse_date(&date, self.date_format).map_err(|e| e.at(row_num, Field::Date))?;

        let details = LineDetails {
            posting_date,
            value_date,
            payee,
            counterparty_account: bank_account_to,
            memo,
            amount,
            currency: self.currency.to_string(),
        };
        Ok(StatementLine::new(details, row_num))
    }
}
