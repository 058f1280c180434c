use crate::config::Config;
use crate::importer::{parser, validator};
use crate::services::templates::get_template;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::validation::ValidationResult;
use futures_util::StreamExt;
use log::{info, warn};
use md5::Context;
use serde::{Deserialize, Serialize};
use serde_json::from_slice;

/// Hard cap on the buffered CSV file, matching the JSON payload limit
/// configured in `main.rs`. The multipart stream is not covered by
/// `JsonConfig`, so the cap is enforced here as the chunks arrive.
const MAX_CSV_BYTES: usize = 10 * 1024 * 1024;

/// The `json` multipart part sent ahead of the file.
#[derive(Deserialize)]
struct UploadMeta {
    pub template_id: String,
}

/// Appends a chunk to the file buffer, refusing once the total would
/// pass `MAX_CSV_BYTES`.
fn buffer_chunk(bytes: &mut Vec<u8>, chunk: &[u8]) -> Result<(), String> {
    if bytes.len() + chunk.len() > MAX_CSV_BYTES {
        return Err(format!(
            "CSV file is larger than the {} MB upload limit",
            MAX_CSV_BYTES / (1024 * 1024)
        ));
    }
    bytes.extend_from_slice(chunk);
    Ok(())
}

/// What the import preview renders from.
#[derive(Serialize)]
pub struct UploadResponse {
    /// md5 of the uploaded bytes; identical re-uploads hash identically.
    pub file_md5: String,
    pub result: ValidationResult,
}

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `200 OK` with the `UploadResponse` JSON (row-level
///   problems live inside it).
/// - On failure: `400 Bad Request` with the error message.
pub async fn process(config: web::Data<Config>, payload: Multipart) -> impl Responder {
    match upload_recipients(&config.database_path, payload).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Reads the multipart upload, then parses and validates the CSV against
/// the template named in the `json` part.
///
/// The `json` part must arrive before the `file` part so the template's
/// variable count is known by the time the file streams in.
pub async fn upload_recipients(
    db_path: &str,
    mut payload: Multipart,
) -> Result<UploadResponse, Box<dyn std::error::Error>> {
    let mut expected_variable_count: Option<usize> = None;
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut md5_hasher = Context::new();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match field_name.as_deref() {
            Some("json") => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk?);
                }
                let meta: UploadMeta = from_slice(&bytes)?;
                let template = get_template(db_path, &meta.template_id)?;
                expected_variable_count = Some(template.variable_count);
            }

            Some("file") => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();
                if !filename.ends_with(".csv") {
                    return Err("The file must end with .csv".into());
                }
                if expected_variable_count.is_none() {
                    return Err("Template JSON must be sent before the file".into());
                }

                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    md5_hasher.consume(&chunk);
                    buffer_chunk(&mut bytes, &chunk)?;
                }
                file_bytes = Some(bytes);
            }

            _ => {}
        }
    }

    let expected = expected_variable_count.ok_or("Missing template JSON part")?;
    let bytes = file_bytes.ok_or("Missing file part")?;
    let file_md5 = format!("{:x}", md5_hasher.finalize());

    let rows = match parser::parse_rows(&bytes) {
        Ok(rows) => rows,
        Err(e) => {
            // One generic message for any file-level failure; the detail
            // stays in the server log.
            warn!("CSV upload could not be parsed: {}", e);
            return Err("Failed to parse the CSV file. Save it as UTF-8 \
                        comma-separated values and upload it again."
                .into());
        }
    };

    let result = validator::validate_rows(&rows, expected);
    info!(
        "CSV upload validated: {} row(s), {} valid, {} error(s)",
        result.total_rows,
        result.valid_rows.len(),
        result.errors.len()
    );

    Ok(UploadResponse { file_md5, result })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_below_the_limit_accumulate() {
        let mut bytes = Vec::new();
        buffer_chunk(&mut bytes, b"mobile_number,variable_1\n").unwrap();
        buffer_chunk(&mut bytes, b"919876543210,John\n").unwrap();
        assert_eq!(bytes.len(), 43);
    }

    #[test]
    fn oversized_upload_is_refused() {
        let mut bytes = vec![0u8; MAX_CSV_BYTES - 1];
        let err = buffer_chunk(&mut bytes, b"ab").unwrap_err();
        assert!(err.contains("upload limit"));
        // The buffer is left as it was; nothing partial is appended.
        assert_eq!(bytes.len(), MAX_CSV_BYTES - 1);

        // A chunk that lands exactly on the cap still fits.
        let mut exact = vec![0u8; MAX_CSV_BYTES - 1];
        buffer_chunk(&mut exact, b"a").unwrap();
        assert_eq!(exact.len(), MAX_CSV_BYTES);
    }
}
