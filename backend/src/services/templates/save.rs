use crate::config::Config;
use actix_web::{web, Responder};
use common::model::template::MessageTemplate;
use common::requests::SaveTemplateRequest;
use regex::Regex;
use rusqlite::{params, Connection};

pub async fn process(config: web::Data<Config>, payload: web::Json<SaveTemplateRequest>) -> impl Responder {
    match save_template(&config.database_path, &payload) {
        Ok(template) => actix_web::HttpResponse::Ok().json(template),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error saving template: {}", e)),
    }
}

/// Highest placeholder number found in the body. `{{2}}` alone still
/// means two variables are expected per CSV row, since values are matched
/// to placeholders by position.
pub(crate) fn count_placeholders(body: &str) -> Result<usize, String> {
    let re = Regex::new(r"\{\{(\d+)\}\}").map_err(|e| format!("Regex error: {}", e))?;
    let mut highest = 0usize;
    for caps in re.captures_iter(body) {
        let n: usize = caps[1]
            .parse()
            .map_err(|_| "Placeholder number out of range".to_string())?;
        highest = highest.max(n);
    }
    Ok(highest)
}

pub fn save_template(db_path: &str, payload: &SaveTemplateRequest) -> Result<MessageTemplate, String> {
    if payload.id.trim().is_empty() {
        return Err("Template id must not be empty".to_string());
    }
    if payload.name.trim().is_empty() {
        return Err("Template name must not be empty".to_string());
    }

    let variable_count = count_placeholders(&payload.body)?;

    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT OR REPLACE INTO templates (id, name, body, variable_count) VALUES (?1, ?2, ?3, ?4)",
        params![&payload.id, &payload.name, &payload.body, variable_count as i64],
    )
    .map_err(|e| e.to_string())?;

    Ok(MessageTemplate {
        id: payload.id.clone(),
        name: payload.name.clone(),
        body: payload.body.clone(),
        variable_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;

    fn request(id: &str, body: &str) -> SaveTemplateRequest {
        SaveTemplateRequest {
            id: id.to_string(),
            name: "Promo".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn placeholder_count_is_the_highest_number() {
        assert_eq!(count_placeholders("Hi {{1}}, your code is {{2}}").unwrap(), 2);
        assert_eq!(count_placeholders("{{2}} only").unwrap(), 2);
        assert_eq!(count_placeholders("{{1}} and {{1}} again").unwrap(), 1);
        assert_eq!(count_placeholders("no placeholders").unwrap(), 0);
    }

    #[test]
    fn save_persists_the_derived_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.sqlite");
        let path = path.to_str().unwrap();
        init_db(path).unwrap();

        let saved = save_template(path, &request("tpl-1", "Hello {{1}}, see {{2}}")).unwrap();
        assert_eq!(saved.variable_count, 2);

        let conn = Connection::open(path).unwrap();
        let stored: i64 = conn
            .query_row(
                "SELECT variable_count FROM templates WHERE id = 'tpl-1'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(stored, 2);
    }

    #[test]
    fn blank_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.sqlite");
        let path = path.to_str().unwrap();
        init_db(path).unwrap();

        assert!(save_template(path, &request("  ", "body")).is_err());
    }
}
