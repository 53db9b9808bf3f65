pub mod adapter;
pub mod encoding;
pub mod error;
pub mod header;
pub mod parser;
pub mod settings;

pub use adapter::{parse_amount, parse_date, RowAdapter, DEFAULT_DATE_FORMAT};
pub use error::{FieldError, ImportError};
pub use header::{Field, HeaderIndex};
pub use parser::PekaoParser;
pub use settings::PekaoSettings;

pub mod import {
    use pekao_core::Statement;
    use std::path::Path;

    use crate::*;

    pub fn import_pekao_file(path: &Path, settings: &PekaoSettings) -> Result<Statement, ImportError> {
        crate::parser::parse_file(path, settings)
    }

    pub fn import_pekao<R: std::io::Read>(
        data: R,
        settings: &PekaoSettings,
    ) -> Result<Statement, ImportError> {
        crate::parser::parse_statement(data, settings)
    }

    pub fn load_settings(toml_content: &str) -> Result<PekaoSettings, ImportError> {
        PekaoSettings::from_toml(toml_content)
    }
}
