/// Builds the downloadable blank CSV for a template with
/// `variable_count` placeholders: the documented header row plus one
/// example data row users can overwrite.
pub fn sample_csv(variable_count: usize) -> String {
    let mut header = String::from("mobile_number");
    let mut example = String::from("919876543210");
    for n in 1..=variable_count {
        header.push_str(&format!(",variable_{}", n));
        example.push_str(&format!(",value_{}", n));
    }
    format!("{}\n{}\n", header, example)
}

/// File name hint for the sample download, derived from the template
/// name. Anything outside `[A-Za-z0-9_-]` collapses to an underscore so
/// the name survives Content-Disposition quoting.
pub fn sample_file_name(template_name: &str) -> String {
    let safe: String = template_name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let safe = if safe.is_empty() { "template".to_string() } else { safe };
    format!("{}_sample.csv", safe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::{parser, validator};

    #[test]
    fn sample_has_header_and_one_example_row() {
        let csv = sample_csv(3);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("mobile_number,variable_1,variable_2,variable_3"));
        let example = lines.next().unwrap();
        assert_eq!(example.split(',').count(), 4);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn sample_round_trips_through_the_validator() {
        // The example row we hand out must itself pass validation.
        let rows = parser::parse_rows(sample_csv(2).as_bytes()).unwrap();
        let result = validator::validate_rows(&rows, 2);
        assert!(result.is_valid);
        assert_eq!(result.valid_rows.len(), 1);
    }

    #[test]
    fn zero_variables_yields_a_phone_only_sheet() {
        let csv = sample_csv(0);
        assert_eq!(csv, "mobile_number\n919876543210\n");
    }

    #[test]
    fn file_name_is_sanitized() {
        assert_eq!(sample_file_name("Diwali Promo!"), "Diwali_Promo__sample.csv");
        assert_eq!(sample_file_name("  "), "template_sample.csv");
    }
}
