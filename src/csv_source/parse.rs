use crate::utils::Result;
use std::collections::HashMap;

/// Parsed CSV document: the first row is the header, the rest are data rows.
/// Row lengths are not reconciled against the header here; pairing happens
/// per record at render time.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records = reader.records();
        let header = match records.next() {
            Some(first) => first?.iter().map(|s| s.to_string()).collect(),
            None => return Ok(Self::default()),
        };

        let mut rows = Vec::new();
        for result in records {
            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn record_count(&self) -> usize {
        self.rows.len()
    }
}

/// Pair the header with one row positionally. Trailing header fields are
/// absent for short rows, extra cells of long rows are dropped, and a
/// duplicated header name keeps the value of its last column.
pub fn record_map<'a>(header: &'a [String], row: &'a [String]) -> HashMap<&'a str, &'a str> {
    header
        .iter()
        .map(String::as_str)
        .zip(row.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_becomes_header() {
        let table = RecordTable::parse("name,desc\nAlice,Hello\nBob,Hi\n").unwrap();
        assert_eq!(table.header(), ["name", "desc"]);
        assert_eq!(table.record_count(), 2);
        assert_eq!(table.rows()[1], ["Bob", "Hi"]);
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let table = RecordTable::parse("name,desc\r\nAlice,\"Line1\nLine2, more\"\r\n").unwrap();
        assert_eq!(table.rows()[0][1], "Line1\nLine2, more");
    }

    #[test]
    fn empty_text_yields_empty_table() {
        let table = RecordTable::parse("").unwrap();
        assert!(table.header().is_empty());
        assert_eq!(table.record_count(), 0);
    }

    #[test]
    fn header_only_yields_zero_records() {
        let table = RecordTable::parse("a,b\n").unwrap();
        assert_eq!(table.header(), ["a", "b"]);
        assert_eq!(table.record_count(), 0);
    }

    #[test]
    fn rows_may_be_shorter_or_longer_than_header() {
        let table = RecordTable::parse("a,b,c\n1\n1,2,3,4\n").unwrap();
        assert_eq!(table.rows()[0], ["1"]);
        assert_eq!(table.rows()[1], ["1", "2", "3", "4"]);

        let short = record_map(table.header(), &table.rows()[0]);
        assert_eq!(short.get("a"), Some(&"1"));
        assert_eq!(short.get("b"), None);

        let long = record_map(table.header(), &table.rows()[1]);
        assert_eq!(long.len(), 3);
        assert_eq!(long.get("c"), Some(&"3"));
    }

    #[test]
    fn duplicate_header_keeps_last_column_value() {
        let table = RecordTable::parse("id,name,id\nfirst,Alice,second\n").unwrap();
        let record = record_map(table.header(), &table.rows()[0]);
        assert_eq!(record.get("id"), Some(&"second"));
    }
}
