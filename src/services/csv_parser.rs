use tracing::{debug, trace};

use crate::error::{AppError, AppResult};

/// Header contract for bank exports: a blank index column followed by the
/// six named transaction fields.
pub const EXPECTED_FIELDS: [&str; 7] = [
    "",
    "date",
    "description",
    "amount",
    "type",
    "account_number",
    "currency",
];

/// Split raw CSV text into a grid of trimmed fields.
///
/// The export format is naive CSV: fields are separated by commas with no
/// quoting or escaping, so quotes pass through as literal characters.
/// Blank lines are skipped.
pub fn parse_csv(content: &str) -> AppResult<Vec<Vec<String>>> {
    trace!(content_size = content.len(), "Starting CSV parsing");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| AppError::CsvParse(e.to_string()))?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    debug!(row_count = rows.len(), "CSV parsing completed");
    Ok(rows)
}

/// Enforce the fixed seven-column contract: the header row must match
/// [`EXPECTED_FIELDS`] exactly and every data row must be seven fields wide.
pub fn validate_structure(data: &[Vec<String>]) -> AppResult<()> {
    if data.is_empty() {
        return Err(AppError::CsvParse("CSV is empty".to_string()));
    }

    let header = &data[0];
    if header.len() != EXPECTED_FIELDS.len() {
        return Err(AppError::CsvParse(format!(
            "Expected {} columns, got {}",
            EXPECTED_FIELDS.len(),
            header.len()
        )));
    }

    for (i, expected) in EXPECTED_FIELDS.iter().enumerate() {
        if header[i] != *expected {
            return Err(AppError::CsvParse(format!(
                "Expected column {} to be '{}', got '{}'",
                i, expected, header[i]
            )));
        }
    }

    for (i, row) in data.iter().enumerate().skip(1) {
        if row.len() != EXPECTED_FIELDS.len() {
            return Err(AppError::CsvParse(format!(
                "Row {} has {} columns, expected {}",
                i,
                row.len(),
                EXPECTED_FIELDS.len()
            )));
        }
    }

    Ok(())
}
