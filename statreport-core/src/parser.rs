//! Line/cell tokenizing, numeric cell parsing and data type classification.
//!
//! Input is plain text: rows separated by newlines, cells separated by a
//! single comma. There is no quoting, escaping or header handling; a header
//! row is just another row of data.
//!
//! Classification looks at the first row only, while extraction decides per
//! cell (or per row, see [`ExtractionMode`]). A file classified as
//! qualitative can therefore still contribute numeric cells, and vice versa.
//!
//! Files are read as bytes. Invalid UTF-8 sequences (Latin-1 exports, a
//! stray byte in a later row) are replaced with U+FFFD rather than making
//! the whole file unreadable.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::models::{CategoricalSample, DataTypeVerdict, NumericSample, RawRecord};

/// Cell delimiter. Not configurable.
pub const DELIMITER: char = ',';

/// How extracted cells are routed between the numeric and categorical samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMode {
    /// Every cell is routed on its own parse result
    #[default]
    PerCell,
    /// A row goes to the numeric sample only if all of its cells parse;
    /// otherwise all of its cells go to the categorical sample
    PerRow,
}

/// Splits one line into cells.
///
/// A trailing `\r` is dropped, an empty line has no cells, and a single
/// trailing delimiter does not produce an empty final cell. Interior empty
/// cells are kept.
pub fn split_cells(line: &str) -> RawRecord {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }
    let line = line.strip_suffix(DELIMITER).unwrap_or(line);
    line.split(DELIMITER).map(str::to_string).collect()
}

/// Parses a cell as a finite number.
///
/// Surrounding whitespace is ignored. Non-finite spellings such as `NaN` or
/// `inf` are rejected so they cannot poison the estimators.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    match cell.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Classifies in-memory text by its first row.
///
/// Returns [`DataTypeVerdict::Unknown`] when the first row has no cells.
pub fn classify_text(text: &str) -> DataTypeVerdict {
    let first_row = split_cells(text.lines().next().unwrap_or_default());
    if first_row.is_empty() {
        debug!("First row has no cells; data type unresolved");
        return DataTypeVerdict::Unknown;
    }

    match first_row.iter().find(|cell| parse_numeric(cell).is_none()) {
        Some(cell) => {
            trace!("First row cell {:?} is not numeric", cell);
            DataTypeVerdict::Qualitative
        }
        None => DataTypeVerdict::Quantitative,
    }
}

/// Extracts every cell of in-memory text into numeric and categorical samples.
///
/// Traversal is row-major then column-major, and order is preserved within
/// each sample.
pub fn extract_text(text: &str, mode: ExtractionMode) -> (NumericSample, CategoricalSample) {
    let mut numeric = NumericSample::default();
    let mut categorical = CategoricalSample::default();

    for line in text.lines() {
        let record = split_cells(line);
        match mode {
            ExtractionMode::PerCell => {
                for cell in record {
                    match parse_numeric(&cell) {
                        Some(value) => numeric.push(value),
                        None => categorical.push(cell),
                    }
                }
            }
            ExtractionMode::PerRow => {
                let parsed: Option<Vec<f64>> =
                    record.iter().map(|cell| parse_numeric(cell)).collect();
                match parsed {
                    Some(values) => values.into_iter().for_each(|v| numeric.push(v)),
                    None => record.into_iter().for_each(|c| categorical.push(c)),
                }
            }
        }
    }

    debug!(
        "Extracted {} numeric and {} categorical cells",
        numeric.len(),
        categorical.len()
    );
    (numeric, categorical)
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!("Input is not valid UTF-8; replacing invalid sequences");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Reads a whole source file as text.
///
/// # Errors
/// Only I/O failures; undecodable bytes are replaced, not rejected.
pub fn read_source(path: impl AsRef<Path>) -> std::io::Result<String> {
    std::fs::read(path).map(decode)
}

/// Reads only the first line of a source file, terminator included.
fn read_first_line(path: &Path) -> std::io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    Ok(decode(line))
}

/// Classifies the file at `path` by its first row.
///
/// Only the first line is read. An unreadable file yields
/// [`DataTypeVerdict::Unknown`]; no error escapes.
pub fn classify(path: impl AsRef<Path>) -> DataTypeVerdict {
    let path = path.as_ref();
    match read_first_line(path) {
        Ok(line) => classify_text(&line),
        Err(e) => {
            warn!("Could not open {}: {}", path.display(), e);
            DataTypeVerdict::Unknown
        }
    }
}

/// Extracts every cell of the file at `path`.
///
/// An unreadable file yields two empty samples; no error escapes.
pub fn extract(path: impl AsRef<Path>, mode: ExtractionMode) -> (NumericSample, CategoricalSample) {
    let path = path.as_ref();
    match read_source(path) {
        Ok(text) => extract_text(&text, mode),
        Err(e) => {
            warn!("Could not open {}: {}", path.display(), e);
            (NumericSample::default(), CategoricalSample::default())
        }
    }
}
