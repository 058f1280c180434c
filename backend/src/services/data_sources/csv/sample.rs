use crate::config::Config;
use crate::importer::sample::{sample_csv, sample_file_name};
use crate::services::templates::get_template;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/data_sources/csv/sample/{template_id}`.
///
/// Serves a blank recipient sheet sized to the template's variable count
/// as a CSV attachment.
pub async fn process(config: web::Data<Config>, template_id: web::Path<String>) -> impl Responder {
    match get_template(&config.database_path, &template_id) {
        Ok(template) => {
            let body = sample_csv(template.variable_count);
            let file_name = sample_file_name(&template.name);
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", file_name),
                ))
                .body(body)
        }
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error: {}", e)),
    }
}
