//! Export parsing
//!
//! Turns one `bos accounting --csv` blob into typed records. Parsing is
//! all-or-nothing: the first bad row fails the whole export.

use csv::{ReaderBuilder, StringRecord};

use crate::error::{BalanceError, BalanceResult};
use crate::models::{ExportKind, Record, Sats};

/// Positions of the required columns within an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the transaction type column
    pub type_column: usize,
    /// Index of the amount column
    pub amount_column: usize,
    /// Index of the notes column
    pub notes_column: usize,
}

impl ColumnMapping {
    /// Locate the required columns in a header record
    ///
    /// Matching is case-insensitive. `bos` labels its date column
    /// "Date & Time", so any header starting with "date" is accepted;
    /// "Fiat Amount" and "Transaction ID" are not mistaken for amount or type.
    pub fn from_headers(kind: ExportKind, headers: &StringRecord) -> BalanceResult<Self> {
        let mut date_column = None;
        let mut type_column = None;
        let mut amount_column = None;
        let mut notes_column = None;

        for (idx, header) in headers.iter().enumerate() {
            let h = header.trim().to_lowercase();

            if h.starts_with("date") && date_column.is_none() {
                date_column = Some(idx);
            } else if h == "type" {
                type_column = Some(idx);
            } else if h == "amount" {
                amount_column = Some(idx);
            } else if h == "notes" || h == "note" {
                notes_column = Some(idx);
            }
        }

        let require = |column: Option<usize>, name: &str| {
            column.ok_or_else(|| {
                BalanceError::malformed(kind, 0, format!("header is missing the '{}' column", name))
            })
        };

        Ok(Self {
            date_column: require(date_column, "Date")?,
            type_column: require(type_column, "Type")?,
            amount_column: require(amount_column, "Amount")?,
            notes_column: require(notes_column, "Notes")?,
        })
    }
}

/// Parse a whole export blob into records
///
/// An empty or whitespace-only blob has no records. Data rows are numbered
/// from 1 in error messages; row 0 is the header.
pub fn parse_export(kind: ExportKind, body: &str) -> BalanceResult<Vec<Record>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| BalanceError::malformed(kind, 0, format!("unreadable header: {}", e)))?
        .clone();
    let mapping = ColumnMapping::from_headers(kind, &headers)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = result
            .map_err(|e| BalanceError::malformed(kind, row, format!("unreadable row: {}", e)))?;
        records.push(parse_record(kind, &record, row, &mapping)?);
    }

    Ok(records)
}

/// Parse a single CSV row
fn parse_record(
    kind: ExportKind,
    record: &StringRecord,
    row: usize,
    mapping: &ColumnMapping,
) -> BalanceResult<Record> {
    let field = |column: usize, name: &str| {
        record.get(column).ok_or_else(|| {
            BalanceError::malformed(kind, row, format!("missing '{}' column", name))
        })
    };

    let date = field(mapping.date_column, "Date")?;
    let transaction_type = field(mapping.type_column, "Type")?;
    let amount_str = field(mapping.amount_column, "Amount")?;
    let notes = field(mapping.notes_column, "Notes")?;

    let amount = Sats::parse(amount_str)
        .map_err(|e| BalanceError::malformed(kind, row, e.to_string()))?;

    Ok(Record::new(date, transaction_type, amount, notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_simple_export() {
        let body = "Date,Type,Amount,Notes\n\
                    2025-01-05,fee:network,-500,Circular payment routing fee\n\
                    2025-01-05,fee:network,-1.25,\n";

        let records = parse_export(ExportKind::Payments, body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].transaction_type, "fee:network");
        assert_eq!(records[0].amount, Sats::from(dec!(-500)));
        assert_eq!(records[0].notes, "Circular payment routing fee");
        assert_eq!(records[1].amount, Sats::from(dec!(-1.25)));
        assert!(!records[1].has_notes());
    }

    #[test]
    fn test_parse_bos_style_header() {
        let body = "Amount,Asset,Date & Time,Fiat Amount,From ID,Network ID,Notes,To ID,Transaction ID,Type\n\
                    12.5,BTC,2025-01-05T10:00:00.000Z,,,,,,abc,income\n";

        let records = parse_export(ExportKind::Forwards, body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "2025-01-05T10:00:00.000Z");
        assert_eq!(records[0].transaction_type, "income");
        assert_eq!(records[0].amount, Sats::from(dec!(12.5)));
    }

    #[test]
    fn test_quoted_notes_with_commas() {
        let body = "Date,Type,Amount,Notes\n2025-01-05,fee:network,-30,\"to peer X, again\"\n";
        let records = parse_export(ExportKind::Payments, body).unwrap();
        assert_eq!(records[0].notes, "to peer X, again");
    }

    #[test]
    fn test_empty_blob_has_no_records() {
        assert!(parse_export(ExportKind::ChainFees, "").unwrap().is_empty());
        assert!(parse_export(ExportKind::ChainFees, "  \n").unwrap().is_empty());
        assert!(parse_export(ExportKind::ChainFees, "Date,Type,Amount,Notes\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_missing_header_column() {
        let err = parse_export(ExportKind::Invoices, "Date,Type,Amount\n2025-01-05,x,1\n").unwrap_err();
        match err {
            BalanceError::MalformedRecord { kind, row, reason } => {
                assert_eq!(kind, ExportKind::Invoices);
                assert_eq!(row, 0);
                assert!(reason.contains("Notes"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_short_row_names_row_index() {
        let body = "Date,Type,Amount,Notes\n2025-01-05,x,1,ok\n2025-01-05,x\n";
        let err = parse_export(ExportKind::Forwards, body).unwrap_err();
        assert!(matches!(
            err,
            BalanceError::MalformedRecord { kind: ExportKind::Forwards, row: 2, .. }
        ));
    }

    #[test]
    fn test_invalid_amount() {
        let body = "Date,Type,Amount,Notes\n2025-01-05,x,lots,\n";
        let err = parse_export(ExportKind::ChainSends, body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed record in chain-sends export at row 1: invalid amount 'lots'"
        );
    }

    #[test]
    fn test_amount_beyond_supply_is_malformed() {
        let body = "Date,Type,Amount,Notes\n2025-01-05,income,1,\n2025-01-05,income,9e20,\n";
        let err = parse_export(ExportKind::Forwards, body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed record in forwards export at row 2: amount '9e20' exceeds the bitcoin supply"
        );
    }
}
