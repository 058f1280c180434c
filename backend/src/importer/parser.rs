use crate::importer::ImportError;

/// Splits raw CSV bytes into data rows.
///
/// The first row is the header and is consumed here, never returned: the
/// expected variable count comes from the selected template, not from the
/// header. Rows may have differing field counts (`flexible`); the
/// validator turns that into a per-row error rather than this function
/// failing. A trailing newline produces no spurious empty row.
pub fn parse_rows(data: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(rows)
}
