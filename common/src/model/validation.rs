use crate::model::recipient::Recipient;
use serde::{Deserialize, Serialize};

/// A single problem found while validating an uploaded recipient CSV.
///
/// Produced on the backend by the CSV validator and rendered by the
/// frontend in the expandable error list of the import preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Identifies where the problem is, e.g. `"Row 3 mobile_number"` or
    /// `"Row 5 variable_2"`. Row numbers are 1-based positions in the
    /// source file, so the first data row (after the header) is row 2.
    pub field: String,
    /// Human-readable cause, shown next to the field in the preview.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Aggregate verdict for one CSV upload attempt.
///
/// This is transient state: a fresh result is computed on every upload and
/// discarded when the user confirms, cancels, or re-uploads. Nothing is
/// cached between attempts.
///
/// `is_valid` is a pipeline-wide verdict, not a per-row one: a single bad
/// row blocks submission of the whole import even though `valid_rows`
/// still lists every row that individually passed. The confirmation UI
/// keys its submit button off `is_valid`, never off `valid_rows` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    /// Every row that individually passed validation, in file order.
    pub valid_rows: Vec<Recipient>,
    /// Every problem found, in file order. A single row can contribute
    /// more than one entry (e.g. two empty variables).
    pub errors: Vec<ValidationError>,
    /// Number of data rows parsed from the file (header excluded).
    pub total_rows: usize,
}

impl ValidationResult {
    /// Rows that produced at least one error. Together with
    /// `valid_rows.len()` this always sums to `total_rows`.
    pub fn invalid_row_count(&self) -> usize {
        self.total_rows - self.valid_rows.len()
    }
}
