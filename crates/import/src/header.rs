use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FieldError;

/// Semantic columns of a PEKAO SA history export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Posting ("księgowania") date.
    DateUser,
    /// Value ("waluty") date.
    Date,
    Payee,
    BankAccountTo,
    Memo,
    Amount,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::DateUser,
        Field::Date,
        Field::Payee,
        Field::BankAccountTo,
        Field::Memo,
        Field::Amount,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::DateUser => "date_user",
            Field::Date => "date",
            Field::Payee => "payee",
            Field::BankAccountTo => "bank_account_to",
            Field::Memo => "memo",
            Field::Amount => "amount",
        }
    }

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Option<Field> {
        HEADER_LABELS
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, field)| *field)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recognized header labels: the bank's own Polish labels, then plain aliases.
pub const HEADER_LABELS: &[(&str, Field)] = &[
    ("#Data księgowania", Field::DateUser),
    ("#Data waluty", Field::Date),
    ("#Szczegóły odbiorcy/nadawcy", Field::Payee),
    ("#Rachunek odbiorcy/nadawcy", Field::BankAccountTo),
    ("#Tytułem", Field::Memo),
    ("#Kwota operacji", Field::Amount),
    ("posting_date", Field::DateUser),
    ("value_date", Field::Date),
    ("payee", Field::Payee),
    ("counterparty_account", Field::BankAccountTo),
    ("memo", Field::Memo),
    ("amount", Field::Amount),
];

/// Column position of each recognized field, built once from the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    columns: [Option<usize>; 6],
    ignored: Vec<String>,
}

impl HeaderIndex {
    /// Map recognized labels to their column. Order-independent; unknown
    /// labels (`#Waluta`, `#Typ operacji`, ...) are kept only for
    /// diagnostics. A label repeated later in the row overrides the earlier
    /// column.
    pub fn resolve<S: AsRef<str>>(header_row: &[S]) -> Self {
        let mut index = HeaderIndex::default();
        for (i, label) in header_row.iter().enumerate() {
            let label = label.as_ref();
            match Field::from_label(label) {
                Some(field) => {
                    tracing::debug!(field = %field, column = i, "header column resolved");
                    index.columns[field.slot()] = Some(i);
                }
                None => {
                    tracing::debug!(label, column = i, "header column ignored");
                    index.ignored.push(label.to_string());
                }
            }
        }
        if index.is_empty() {
            tracing::warn!(
                columns = header_row.len(),
                "header row contains none of the recognized labels"
            );
        }
        index
    }

    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns[field.slot()]
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Option::is_none)
    }

    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Trimmed cell for `field`; empty when the header lacks the field or the
    /// cell is blank.
    pub fn get_value<S: AsRef<str>>(&self, row: &[S], field: Field) -> Result<String, FieldError> {
        let Some(index) = self.column(field) else {
            return Ok(String::new());
        };
        let cell = row.get(index).ok_or(FieldError::MalformedRow {
            index,
            len: row.len(),
        })?;
        Ok(cell.as_ref().trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLISH_HEADER: [&str; 8] = [
        "#Data księgowania",
        "#Data waluty",
        "#Szczegóły odbiorcy/nadawcy",
        "#Rachunek odbiorcy/nadawcy",
        "#Tytułem",
        "#Kwota operacji",
        "#Waluta",
        "#Typ operacji",
    ];

    fn permutations<'a>(labels: &[&'a str]) -> Vec<Vec<&'a str>> {
        if labels.len() <= 1 {
            return vec![labels.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..labels.len() {
            let mut rest = labels.to_vec();
            let first = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, first);
                out.push(tail);
            }
        }
        out
    }

    // ── resolve ───────────────────────────────────────────────────────────────

    #[test]
    fn resolve_polish_export_header() {
        let index = HeaderIndex::resolve(&POLISH_HEADER);
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(index.column(*field), Some(i), "{field}");
        }
        assert_eq!(index.ignored(), ["#Waluta", "#Typ operacji"]);
    }

    #[test]
    fn resolve_is_order_independent() {
        let orders = permutations(&POLISH_HEADER[..6]);
        assert_eq!(orders.len(), 720);

        for order in orders {
            let index = HeaderIndex::resolve(&order);
            for (col, label) in order.iter().enumerate() {
                let field = Field::from_label(label).unwrap();
                assert_eq!(index.column(field), Some(col), "{order:?}");
            }
        }
    }

    #[test]
    fn resolve_english_aliases() {
        let header = ["amount", "memo", "counterparty_account", "payee", "value_date", "posting_date"];
        let index = HeaderIndex::resolve(&header);
        assert_eq!(index.column(Field::Amount), Some(0));
        assert_eq!(index.column(Field::DateUser), Some(5));
        assert_eq!(index.column(Field::Date), Some(4));
        assert!(index.ignored().is_empty());
    }

    #[test]
    fn resolve_is_exact_match() {
        let header = ["#data księgowania", " #Tytułem", "#Kwota operacji ", "Amount"];
        let index = HeaderIndex::resolve(&header);
        assert!(index.is_empty());
        assert_eq!(index.ignored().len(), 4);
    }

    #[test]
    fn resolve_later_duplicate_wins() {
        let index = HeaderIndex::resolve(&["#Tytułem", "x", "memo"]);
        assert_eq!(index.column(Field::Memo), Some(2));
    }

    #[test]
    fn resolve_empty_header() {
        let empty: [&str; 0] = [];
        let index = HeaderIndex::resolve(&empty);
        assert!(index.is_empty());
        assert_eq!(index.column(Field::Amount), None);
    }

    // ── get_value ─────────────────────────────────────────────────────────────

    #[test]
    fn get_value_trims_cells() {
        let index = HeaderIndex::resolve(&["payee", "memo"]);
        let row = ["  Jan Kowalski ", "\tFaktura 1 "];
        assert_eq!(index.get_value(&row, Field::Payee).unwrap(), "Jan Kowalski");
        assert_eq!(index.get_value(&row, Field::Memo).unwrap(), "Faktura 1");
    }

    #[test]
    fn get_value_missing_field_is_empty() {
        let index = HeaderIndex::resolve(&["payee"]);
        let row = ["Jan"];
        for field in [Field::Amount, Field::Memo, Field::DateUser] {
            assert_eq!(index.get_value(&row, field).unwrap(), "");
        }
        let empty_row: [&str; 0] = [];
        assert_eq!(index.get_value(&empty_row, Field::Amount).unwrap(), "");
    }

    #[test]
    fn get_value_blank_cell_is_empty() {
        let index = HeaderIndex::resolve(&["payee", "bank_account_to", "counterparty_account"]);
        let row = ["Jan", "x", "   "];
        assert_eq!(index.get_value(&row, Field::BankAccountTo).unwrap(), "");
    }

    #[test]
    fn get_value_out_of_bounds() {
        let index = HeaderIndex::resolve(&["payee", "memo", "amount"]);
        let row = ["Jan", "Faktura"];
        assert_eq!(
            index.get_value(&row, Field::Amount),
            Err(FieldError::MalformedRow { index: 2, len: 2 })
        );
        assert_eq!(index.get_value(&row, Field::Memo).unwrap(), "Faktura");
    }
}
