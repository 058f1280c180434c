//! Manages the CSV recipient data source: bulk upload with validation and
//! the downloadable blank sheet users fill in.
//!
//! The provided routes are:
//! - `POST /api/data_sources/csv/upload`: Handles multipart/form-data
//!   uploads. It expects a `json` field naming the target message template
//!   and a `file` field with the CSV data. The file is parsed and every
//!   data row is validated against the template's variable count; the full
//!   `ValidationResult` is returned to the client for the import preview.
//!   Row problems are data in that result, not HTTP errors; only a file
//!   that cannot be parsed at all produces a `400`. Nothing is persisted
//!   at this stage. The response carries the file's md5 so a client can
//!   tell an identical re-upload from a fixed file.
//!
//! - `GET /api/data_sources/csv/sample/{template_id}`: Serves a blank CSV
//!   sized to the template's variable count, with one example data row,
//!   as an attachment download.

mod sample;
mod upload;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/data_sources/csv";

/// Configures and returns the Actix scope for CSV data source routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Route to upload and validate a recipient CSV.
        .route("/upload", post().to(upload::process))
        // Route to download the blank sample sheet for a template.
        .route("/sample/{template_id}", get().to(sample::process))
}
