use sha2::{Digest, Sha256};

use crate::transaction::LineDetails;

/// Separates hashed fields so `("ab", "c")` and `("a", "bc")` differ.
const FIELD_SEPARATOR: u8 = 0x1f;

/// Derive a stable transaction id from the normalized content of a line.
///
/// SHA-256 over posting date, value date, payee, counterparty account, memo
/// and amount, as lowercase hex (64 chars). The row number and currency are
/// not hashed, so identical rows get identical ids and re-parsing a file
/// reproduces them.
pub fn generate_transaction_id(details: &LineDetails) -> String {
    let mut hasher = Sha256::new();
    let date_text = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
    let parts = [
        date_text(details.posting_date),
        date_text(details.value_date),
        details.payee.clone(),
        details.counterparty_account.clone(),
        details.memo.clone(),
        details.amount.canonical(),
    ];
    for part in &parts {
        hasher.update(part.as_bytes());
        hasher.update([FIELD_SEPARATOR]);
    }
    let hash: [u8; 32] = hasher.finalize().into();
    to_hex(&hash)
}

/// Encode a raw 32-byte hash as a lowercase hex string (64 chars).
pub fn to_hex(hash: &[u8; 32]) -> String {
    hash.iter().map(|b| format!("{b:02x}")).collect()
}
