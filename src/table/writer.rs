//! Delimited text output of [LeafRecord]s.

use crate::model::EdgeLength;
use crate::stats::{COLUMNS, LeafRecord};
use std::io::{self, BufWriter, Write};
use tracing::trace;

/// Token written for absent edge lengths and unset diagnosis times by default.
pub const DEFAULT_MISSING: &str = "None";

/// Style for serializing leaf records to delimited text.
///
/// The default writes a header line and comma-separated values with absent
/// values as `None`. Values are not quoted or escaped, so they must not
/// contain the delimiter.
#[derive(Debug, Clone)]
pub struct TableStyle {
    delimiter: char,
    missing: String,
    header: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            delimiter: ',',
            missing: DEFAULT_MISSING.to_string(),
            header: true,
        }
    }
}

impl TableStyle {
    /// Sets the character separating values.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the token written for absent values.
    pub fn with_missing(mut self, missing: impl Into<String>) -> Self {
        self.missing = missing.into();
        self
    }

    /// Omits the header line.
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    /// Returns the character separating values.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the token written for absent values.
    pub fn missing(&self) -> &str {
        &self.missing
    }

    /// Returns whether a header line is written.
    pub fn has_header(&self) -> bool {
        self.header
    }
}

/// Writes the header line (if enabled) and one line per record to `writer`.
///
/// # Errors
/// Returns an I/O error if writing fails.
///
/// # Example
/// ```ignore
/// use leafstats::table::{TableStyle, write_leaf_table};
/// use std::fs::File;
///
/// let file = File::create("leaf_stats.csv")?;
/// write_leaf_table(file, &records, &TableStyle::default())?;
/// ```
pub fn write_leaf_table<W: Write>(
    writer: W,
    records: &[LeafRecord],
    style: &TableStyle,
) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    if style.header {
        writer.write_all(header_line(style).as_bytes())?;
        writer.write_all(b"\n")?;
    }
    for record in records {
        let line = record_line(record, style);
        trace!(leaf = record.name(), "{line}");
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()
}

/// Returns the full table as a string, each line terminated by `\n`.
pub fn to_leaf_table(records: &[LeafRecord], style: &TableStyle) -> String {
    let mut table = String::new();
    if style.header {
        table.push_str(&header_line(style));
        table.push('\n');
    }
    for record in records {
        table.push_str(&record_line(record, style));
        table.push('\n');
    }
    table
}

/// Returns the column names joined by the delimiter (without line break).
pub fn header_line(style: &TableStyle) -> String {
    let mut line = String::new();
    for (i, column) in COLUMNS.iter().enumerate() {
        if i > 0 {
            line.push(style.delimiter);
        }
        line.push_str(column);
    }
    line
}

/// Returns the values of `record` in column order joined by the delimiter
/// (without line break).
pub fn record_line(record: &LeafRecord, style: &TableStyle) -> String {
    let values = [
        record.name().to_string(),
        record
            .diagnosis()
            .map_or_else(|| style.missing.clone(), format_real),
        format_real(record.efficacy()),
        match record.edge_length() {
            EdgeLength::Present(length) => format_real(*length),
            EdgeLength::Absent => style.missing.clone(),
        },
        format_real(record.root_to_tip_weighted()),
        record.root_to_tip_unweighted().to_string(),
        record.sibling_leaf_count().to_string(),
        format_real(record.closest_leaf_distance()),
    ];
    debug_assert_eq!(values.len(), COLUMNS.len());

    let mut line = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(style.delimiter);
        }
        line.push_str(value);
    }
    line
}

/// Formats a real number in shortest round-trip form, keeping a fractional
/// part for whole numbers (`2.0`) and writing infinity as `inf`.
pub fn format_real(value: f64) -> String {
    format!("{value:?}")
}
