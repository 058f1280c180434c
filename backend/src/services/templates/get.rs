use crate::config::Config;
use actix_web::web;
use common::model::template::MessageTemplate;
use rusqlite::{params, Connection};

/// Actix web handler for `GET /api/templates/{template_id}`.
pub async fn process(config: web::Data<Config>, template_id: web::Path<String>) -> impl actix_web::Responder {
    match get_template(&config.database_path, &template_id) {
        Ok(template) => actix_web::HttpResponse::Ok().json(template),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving template: {}", e)),
    }
}

/// Fetches a template by id. Returns `Err` if the template does not
/// exist or the database cannot be read.
pub fn get_template(db_path: &str, template_id: &str) -> Result<MessageTemplate, String> {
    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;
    let mut stmt = conn
        .prepare("SELECT id, name, body, variable_count FROM templates WHERE id = ?1")
        .map_err(|e| e.to_string())?;

    let template = stmt
        .query_row(params![template_id], |row| {
            Ok(MessageTemplate {
                id: row.get(0)?,
                name: row.get(1)?,
                body: row.get(2)?,
                variable_count: row.get::<_, i64>(3)? as usize,
            })
        })
        .map_err(|_| "Template not found".to_string())?;

    Ok(template)
}
