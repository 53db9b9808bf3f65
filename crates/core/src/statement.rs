use serde::Serialize;
use std::collections::HashSet;

use crate::account::AccountType;
use crate::money::Money;
use crate::period::DateRange;
use crate::transaction::StatementLine;

/// Account-level statement container filled one line at a time.
///
/// Bank id, account id and currency are fixed for the whole file and come
/// from the caller, never from row data.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub bank_id: String,
    pub account_id: String,
    pub currency: String,
    pub account_type: AccountType,
    lines: Vec<StatementLine>,
    #[serde(skip)]
    issued_ids: HashSet<String>,
}

impl Statement {
    pub fn new(
        bank_id: impl Into<String>,
        account_id: impl Into<String>,
        currency: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Statement {
            bank_id: bank_id.into(),
            account_id: account_id.into(),
            currency: currency.into(),
            account_type,
            lines: Vec::new(),
            issued_ids: HashSet::new(),
        }
    }

    /// Append a line, suffixing `-1`, `-2`, ... to an id already used in
    /// this statement so every line keeps a distinct id.
    pub fn push_line(&mut self, mut line: StatementLine) {
        if !self.issued_ids.insert(line.id.clone()) {
            let base = std::mem::take(&mut line.id);
            let mut n = 1usize;
            loop {
                let candidate = format!("{base}-{n}");
                if self.issued_ids.insert(candidate.clone()) {
                    line.id = candidate;
                    break;
                }
                n += 1;
            }
            tracing::warn!(
                refnum = %line.refnum,
                id = %line.id,
                "duplicate transaction content, id disambiguated"
            );
        }
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[StatementLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Earliest and latest effective date across all lines; `None` when no
    /// line carries a date.
    pub fn date_range(&self) -> Option<DateRange> {
        self.lines
            .iter()
            .filter_map(StatementLine::effective_date)
            .fold(None, |range: Option<DateRange>, date| {
                Some(match range {
                    Some(r) => r.including(date),
                    None => DateRange::day(date),
                })
            })
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| l.amount).sum()
    }
}
