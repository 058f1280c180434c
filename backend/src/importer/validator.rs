use common::model::recipient::Recipient;
use common::model::validation::{ValidationError, ValidationResult};
use regex::Regex;
use std::sync::OnceLock;

/// Shown to the user whenever a mobile number fails validation.
pub const PHONE_FORMAT_HINT: &str =
    "Expected format: 91 followed by exactly 10 digits (e.g. 919876543210)";

// India-only for now; the country code is hard-coded across the product.
// [0-9] rather than \d: the regex crate's \d is Unicode-aware and would
// accept digits like Devanagari १२३, which are not valid in a number.
fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^91[0-9]{10}$").expect("static phone pattern"))
}

/// Validates parsed CSV data rows against a template's variable count.
///
/// Per row: the first field must be a `91XXXXXXXXXX` mobile number, the
/// remaining fields must number exactly `expected_variable_count` and
/// none of them may be blank. Rows with zero problems go to
/// `valid_rows`; every problem from every row accumulates into one flat
/// error list. Row numbers in error fields are 1-based source-file
/// positions, so the first data row reports as row 2.
///
/// Duplicate mobile numbers across rows are accepted here; the duplicate
/// check only exists on the manual-entry path (see campaign creation).
pub fn validate_rows(rows: &[Vec<String>], expected_variable_count: usize) -> ValidationResult {
    let mut valid_rows = Vec::new();
    let mut errors: Vec<ValidationError> = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        let source_row = idx + 2; // +2: header row plus 1-based numbering
        let errors_before = errors.len();

        let phone = row.first().map(String::as_str).unwrap_or("");
        if !phone_regex().is_match(phone) {
            errors.push(ValidationError::new(
                format!("Row {} mobile_number", source_row),
                format!("Invalid mobile number '{}'. {}", phone, PHONE_FORMAT_HINT),
            ));
        }

        let variables = row.get(1..).unwrap_or(&[]);
        if variables.len() != expected_variable_count {
            errors.push(ValidationError::new(
                format!("Row {} variables", source_row),
                format!(
                    "Expected {} variable(s), found {}",
                    expected_variable_count,
                    variables.len()
                ),
            ));
        } else {
            for (pos, value) in variables.iter().enumerate() {
                if value.trim().is_empty() {
                    errors.push(ValidationError::new(
                        format!("Row {} variable_{}", source_row, pos + 1),
                        "Variable value is (empty)".to_string(),
                    ));
                }
            }
        }

        if errors.len() == errors_before {
            valid_rows.push(Recipient {
                mobile_number: phone.to_string(),
                dynamic_variables: variables.to_vec(),
            });
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        valid_rows,
        errors,
        total_rows: rows.len(),
    }
}

/// Format check used by the manual-entry path. Same rule as the CSV
/// validator's first column.
pub fn is_valid_mobile_number(number: &str) -> bool {
    phone_regex().is_match(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn clean_rows_all_pass() {
        let rows = vec![
            row(&["919876543210", "John", "john@x.com"]),
            row(&["919876543211", "Jane", "jane@x.com"]),
        ];
        let result = validate_rows(&rows, 2);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.valid_rows.len(), 2);
        assert_eq!(result.total_rows, 2);
        assert_eq!(result.invalid_row_count(), 0);
    }

    #[test]
    fn bad_phone_is_attributed_to_the_phone_column() {
        for phone in ["9876543210", "91987654321", "9198765432100", "91abcdefghij", "+919876543210", ""] {
            let result = validate_rows(&[row(&[phone, "x"])], 1);
            assert!(!result.is_valid, "{:?} should be rejected", phone);
            assert!(result.valid_rows.is_empty());
            assert!(result.errors[0].field.contains("mobile_number"));
        }
    }

    #[test]
    fn variable_count_mismatch_is_an_error() {
        // Too few and too many, including an unescaped comma splitting a value.
        let too_few = validate_rows(&[row(&["919876543210", "a"])], 2);
        let too_many = validate_rows(&[row(&["919876543210", "a", "b", "c"])], 2);
        for result in [too_few, too_many] {
            assert!(!result.is_valid);
            assert!(result.valid_rows.is_empty());
            assert_eq!(result.errors.len(), 1);
        }
    }

    #[test]
    fn empty_variable_is_a_distinct_error() {
        let result = validate_rows(&[row(&["919876543210", "a", " "])], 2);
        assert!(!result.is_valid);
        assert!(result.valid_rows.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].field.ends_with("variable_2"));
    }

    #[test]
    fn one_row_can_produce_several_errors() {
        let result = validate_rows(&[row(&["bogus", "", ""])], 2);
        // Bad phone plus two empty variables.
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.invalid_row_count(), 1);
    }

    #[test]
    fn duplicate_numbers_are_not_rejected() {
        let rows = vec![
            row(&["919876543210", "John"]),
            row(&["919876543210", "Jane"]),
        ];
        let result = validate_rows(&rows, 1);
        assert!(result.is_valid);
        assert_eq!(result.valid_rows.len(), 2);
    }

    #[test]
    fn row_numbers_account_for_the_header() {
        let rows = vec![row(&["919876543210", "ok"]), row(&["bogus", "ok"])];
        let result = validate_rows(&rows, 1);
        // Second data row is row 3 of the source file.
        assert_eq!(result.errors[0].field, "Row 3 mobile_number");
    }

    #[test]
    fn validation_is_idempotent() {
        let rows = vec![
            row(&["919876543210", "John", "john@x.com"]),
            row(&["9876543210", "Jane", "jane@x.com"]),
            row(&["919876543211", "Bob", ""]),
        ];
        let first = validate_rows(&rows, 2);
        let second = validate_rows(&rows, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn mixed_file_partitions_rows() {
        let rows = vec![
            row(&["919876543210", "John", "john@x.com"]),
            row(&["9876543210", "Jane", "jane@x.com"]),
            row(&["919876543211", "Bob", ""]),
        ];
        let result = validate_rows(&rows, 2);

        assert!(!result.is_valid);
        assert_eq!(
            result.valid_rows,
            vec![Recipient {
                mobile_number: "919876543210".to_string(),
                dynamic_variables: vec!["John".to_string(), "john@x.com".to_string()],
            }]
        );
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].field.contains("Row 3 mobile_number"));
        assert!(result.errors[1].field.contains("Row 4 variable_2"));
        assert_eq!(result.valid_rows.len() + result.invalid_row_count(), result.total_rows);
    }

    #[test]
    fn is_valid_tracks_errors_exactly() {
        let clean = validate_rows(&[row(&["919876543210", "x"])], 1);
        assert_eq!(clean.is_valid, clean.errors.is_empty());
        let dirty = validate_rows(&[row(&["bogus", "x"])], 1);
        assert_eq!(dirty.is_valid, dirty.errors.is_empty());
        assert!(!dirty.is_valid);
    }

    #[test]
    fn variables_keep_their_order() {
        let rows = vec![row(&["919876543210", "first", "second", "third"])];
        let result = validate_rows(&rows, 3);
        assert_eq!(result.valid_rows[0].dynamic_variables, vec!["first", "second", "third"]);
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        // Ten Devanagari digits after the country code: right length,
        // wrong alphabet. Must fail on both import paths.
        let number = "91१२३४५६७८९०";
        let result = validate_rows(&[row(&[number, "x"])], 1);
        assert!(!result.is_valid);
        assert!(result.valid_rows.is_empty());
        assert!(result.errors[0].field.contains("mobile_number"));
        assert!(!is_valid_mobile_number(number));
    }

    #[test]
    fn manual_number_check_matches_csv_rule() {
        assert!(is_valid_mobile_number("919876543210"));
        assert!(!is_valid_mobile_number("09876543210"));
        assert!(!is_valid_mobile_number("91 9876543210"));
    }
}
