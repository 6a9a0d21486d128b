//! In-memory CSV table with name-addressed columns.

use std::io;

use csv::StringRecord;
use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{PricingError, Result, TableKind};

/// Header row plus records, all cells kept as the original text.
///
/// Every record has exactly as many cells as the header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Table {
    /// Creates an empty table with the given header row
    pub fn new<I, T>(headers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            headers: headers.into_iter().collect(),
            records: Vec::new(),
        }
    }

    /// Reads a comma-separated table with a header row.
    ///
    /// Header names are trimmed, cells are kept verbatim. Records shorter than
    /// the header are padded with empty cells; longer records are rejected.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut table = Self::new(&headers);

        for result in rdr.records() {
            let record = result?;
            if record.len() > headers.len() {
                return Err(PricingError::RaggedRow {
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            table.push_record(record);
        }

        debug!(
            "Read table with {} columns and {} rows",
            table.headers.len(),
            table.records.len()
        );
        Ok(table)
    }

    /// Writes the header row followed by every record
    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for record in &self.records {
            wtr.write_record(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Appends a record, padding it with empty cells up to the header width
    pub fn push_record(&mut self, record: StringRecord) {
        let mut record = record;
        while record.len() < self.headers.len() {
            record.push_field("");
        }
        self.records.push(record);
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the first column with this exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Like [`Table::column_index`], but a missing column is a schema error
    pub fn require_column(&self, table: TableKind, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| PricingError::MissingColumn {
                table,
                column: name.to_string(),
            })
    }

    /// Checks that every listed column exists
    pub fn require_columns(&self, table: TableKind, names: &[&str]) -> Result<()> {
        for name in names {
            self.require_column(table, name)?;
        }
        Ok(())
    }

    /// Returns the cell of `record` in the named column, if the column exists
    pub fn cell<'a>(&self, record: &'a StringRecord, column: &str) -> Option<&'a str> {
        self.column_index(column).and_then(|idx| record.get(idx))
    }

    /// Iterates over every cell of the named column
    pub fn column_values<'a>(&'a self, column: &str) -> Option<impl Iterator<Item = &'a str>> {
        let idx = self.column_index(column)?;
        Some(
            self.records
                .iter()
                .map(move |record| record.get(idx).unwrap_or_default()),
        )
    }

    /// Deserializes one record into a typed row using the header names
    pub fn deserialize_record<T: DeserializeOwned>(&self, record: &StringRecord) -> Result<T> {
        Ok(record.deserialize(Some(&self.headers))?)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
