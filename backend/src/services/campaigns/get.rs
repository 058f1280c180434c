use crate::config::Config;
use actix_web::web;
use rusqlite::{params, Connection};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CampaignSummary {
    pub id: String,
    pub template_id: String,
    pub source: String,
    pub group_id: Option<String>,
    pub created_at: String,
    pub recipient_count: usize,
}

/// Actix web handler for `GET /api/campaigns/{campaign_id}`.
pub async fn process(config: web::Data<Config>, campaign_id: web::Path<String>) -> impl actix_web::Responder {
    match get_campaign(&config.database_path, &campaign_id) {
        Ok(summary) => actix_web::HttpResponse::Ok().json(summary),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving campaign: {}", e)),
    }
}

pub fn get_campaign(db_path: &str, campaign_id: &str) -> Result<CampaignSummary, String> {
    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;

    let mut summary = conn
        .query_row(
            "SELECT id, template_id, source, group_id, created_at FROM campaigns WHERE id = ?1",
            params![campaign_id],
            |row| {
                Ok(CampaignSummary {
                    id: row.get(0)?,
                    template_id: row.get(1)?,
                    source: row.get(2)?,
                    group_id: row.get(3)?,
                    created_at: row.get(4)?,
                    recipient_count: 0,
                })
            },
        )
        .map_err(|_| "Campaign not found".to_string())?;

    summary.recipient_count = conn
        .query_row(
            "SELECT COUNT(*) FROM recipients WHERE campaign_id = ?1",
            params![campaign_id],
            |row| row.get::<_, i64>(0),
        )
        .map_err(|e| e.to_string())? as usize;

    Ok(summary)
}
