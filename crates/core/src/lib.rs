pub mod account;
pub mod id;
pub mod money;
pub mod period;
pub mod statement;
pub mod transaction;

pub use account::AccountType;
pub use id::generate_transaction_id;
pub use money::Money;
pub use period::DateRange;
pub use statement::Statement;
pub use transaction::{LineDetails, StatementLine, TransactionType};
