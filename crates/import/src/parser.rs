use pekao_core::Statement;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::adapter::RowAdapter;
use crate::encoding::{decode, resolve_encoding};
use crate::error::ImportError;
use crate::header::HeaderIndex;
use crate::settings::PekaoSettings;

/// PEKAO SA history files are tab-separated text saved as `.txt`, unquoted.
const DELIMITER: u8 = b'\t';

pub struct PekaoParser;

impl PekaoParser {
    /// Read the header, then adapt every data row in file order.
    ///
    /// Rows are numbered from 1; whitespace-only rows are skipped without
    /// consuming a number. The first failing row aborts the whole file.
    pub fn parse_text(text: &str, settings: &PekaoSettings) -> Result<Statement, ImportError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(DELIMITER)
            .flexible(true)
            .quoting(false)
            .from_reader(text.as_bytes());
        let mut records = reader.records();

        let header_record = records.next().ok_or(ImportError::MissingHeader)??;
        let header_row: Vec<&str> = header_record.iter().collect();
        let header = HeaderIndex::resolve(&header_row);
        let adapter = RowAdapter::new(&header, settings);

        let mut statement = Statement::new(
            settings.bank_id.as_str(),
            settings.normalized_account_id(),
            settings.currency.as_str(),
            settings.account_type,
        );

        let mut row_num = 0usize;
        for result in records {
            let record = result?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            row_num += 1;
            let row: Vec<&str> = record.iter().collect();
            statement.push_line(adapter.adapt(&row, row_num)?);
        }

        tracing::info!(
            account_id = %statement.account_id,
            lines = statement.len(),
            ignored_columns = header.ignored().len(),
            "parsed PEKAO SA statement"
        );
        Ok(statement)
    }
}

pub fn parse_statement<R: Read>(
    mut data: R,
    settings: &PekaoSettings,
) -> Result<Statement, ImportError> {
    let encoding = resolve_encoding(&settings.charset)?;
    let mut bytes = Vec::new();
    data.read_to_end(&mut bytes)?;
    let text = decode(&bytes, encoding);
    PekaoParser::parse_text(&text, settings)
}

pub fn parse_file(path: &Path, settings: &PekaoSettings) -> Result<Statement, ImportError> {
    tracing::debug!(path = %path.display(), charset = %settings.charset, "opening statement");
    let file = File::open(path)?;
    parse_statement(BufReader::new(file), settings)
}
