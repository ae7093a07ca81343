//! Thin CSV wrapper: pull the required `SMILES` column out of an upload.

use std::io;

use rofive_common::{Result, RofiveError};
use tracing::debug;

/// Header the batch input must carry, matched exactly.
pub const SMILES_COLUMN: &str = "SMILES";

/// Read every value of the `SMILES` column, in row order.
///
/// A missing header is a caller-facing error, not an evaluation outcome:
/// the batch never starts. Cell values are passed through verbatim; the
/// evaluator decides what parses.
pub fn read_smiles_column<R: io::Read>(input: R) -> Result<Vec<String>> {
    // Flexible: a short row becomes an empty SMILES cell instead of
    // aborting the whole upload, preserving row alignment.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let column = reader
        .headers()?
        .iter()
        .position(|h| h == SMILES_COLUMN)
        .ok_or_else(|| RofiveError::MissingColumn(SMILES_COLUMN.to_string()))?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        values.push(record.get(column).unwrap_or_default().to_string());
    }
    debug!(rows = values.len(), "read SMILES column");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_column_in_order() {
        let data = "Name,SMILES\nethanol,CCO\nbenzene,c1ccccc1\n";
        let values = read_smiles_column(data.as_bytes()).unwrap();
        assert_eq!(values, vec!["CCO", "c1ccccc1"]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let data = "Name,Structure\nethanol,CCO\n";
        let err = read_smiles_column(data.as_bytes()).unwrap_err();
        assert!(matches!(err, RofiveError::MissingColumn(ref c) if c == "SMILES"));
    }

    #[test]
    fn header_match_is_exact() {
        let data = "smiles\nCCO\n";
        assert!(read_smiles_column(data.as_bytes()).is_err());
    }

    #[test]
    fn empty_data_section_yields_empty_batch() {
        let values = read_smiles_column("SMILES\n".as_bytes()).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn short_rows_become_empty_strings() {
        // Row 2 has no value under SMILES; keep alignment, let the
        // evaluator reject the empty string.
        let data = "Name,SMILES\na,CCO\nb\nc,C\n";
        let values = read_smiles_column(data.as_bytes()).unwrap();
        assert_eq!(values, vec!["CCO", "", "C"]);
    }
}
