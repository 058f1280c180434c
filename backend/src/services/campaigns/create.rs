use crate::config::Config;
use crate::importer::validator::{is_valid_mobile_number, validate_rows, PHONE_FORMAT_HINT};
use crate::services::templates::get_template;
use actix_web::{web, HttpResponse, Responder};
use common::model::import::ImportStage;
use common::model::recipient::Recipient;
use common::requests::{CreateCampaignRequest, RecipientSource};
use log::info;
use rusqlite::{params, Connection};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CreateCampaignResponse {
    pub campaign_id: String,
    pub recipient_count: usize,
}

/// Actix web handler for `POST /api/campaigns/create`.
pub async fn process(
    config: web::Data<Config>,
    payload: web::Json<CreateCampaignRequest>,
) -> impl Responder {
    match create_campaign(&config.database_path, &payload) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Validates the recipient source against the campaign's template and
/// persists the campaign with its recipients.
///
/// CSV rows get no duplicate check; only the manual-entry path rejects a
/// number that was already typed in.
pub fn create_campaign(
    db_path: &str,
    request: &CreateCampaignRequest,
) -> Result<CreateCampaignResponse, String> {
    let template = get_template(db_path, &request.template_id)?;

    let (source_kind, group_id, recipients): (&str, Option<String>, Vec<Recipient>) =
        match &request.source {
            RecipientSource::CsvRows(rows) => {
                let as_fields: Vec<Vec<String>> = rows
                    .iter()
                    .map(|r| {
                        let mut fields = vec![r.mobile_number.clone()];
                        fields.extend(r.dynamic_variables.iter().cloned());
                        fields
                    })
                    .collect();
                let result = validate_rows(&as_fields, template.variable_count);
                // Same gate the preview UI runs: confirm only goes
                // through on a fully valid, non-empty result.
                match ImportStage::Idle.upload(result).confirm() {
                    ImportStage::Confirmed(rows) => ("csv", None, rows),
                    ImportStage::Previewing(result) if result.errors.is_empty() => {
                        return Err("No recipients to submit".to_string());
                    }
                    ImportStage::Previewing(result) => {
                        return Err(format!(
                            "Fix errors to continue: {} problem(s) found in the submitted rows",
                            result.errors.len()
                        ));
                    }
                    ImportStage::Idle => return Err("No recipients to submit".to_string()),
                }
            }

            RecipientSource::Manual(numbers) => {
                let mut seen = HashSet::new();
                let mut recipients = Vec::with_capacity(numbers.len());
                for raw in numbers {
                    let number = raw.trim();
                    if !is_valid_mobile_number(number) {
                        return Err(format!("Invalid mobile number '{}'. {}", number, PHONE_FORMAT_HINT));
                    }
                    if !seen.insert(number.to_string()) {
                        return Err(format!("Mobile number {} is already added", number));
                    }
                    recipients.push(Recipient {
                        mobile_number: number.to_string(),
                        dynamic_variables: Vec::new(),
                    });
                }
                if recipients.is_empty() {
                    return Err("No recipients to submit".to_string());
                }
                ("manual", None, recipients)
            }

            RecipientSource::Group(group_id) => {
                if group_id.trim().is_empty() {
                    return Err("Group id must not be empty".to_string());
                }
                // Group membership is resolved by the messaging backend at
                // send time; only the reference is stored here.
                ("group", Some(group_id.clone()), Vec::new())
            }
        };

    let campaign_id = Uuid::new_v4().to_string();
    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT INTO campaigns (id, template_id, source, group_id) VALUES (?1, ?2, ?3, ?4)",
        params![&campaign_id, &template.id, source_kind, &group_id],
    )
    .map_err(|e| e.to_string())?;

    for (position, recipient) in recipients.iter().enumerate() {
        let variables_json =
            serde_json::to_string(&recipient.dynamic_variables).map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO recipients (campaign_id, position, mobile_number, variables_json)
             VALUES (?1, ?2, ?3, ?4)",
            params![&campaign_id, position as i64, &recipient.mobile_number, &variables_json],
        )
        .map_err(|e| e.to_string())?;
    }

    info!(
        "Campaign {} created from source '{}' with {} recipient(s)",
        campaign_id,
        source_kind,
        recipients.len()
    );

    Ok(CreateCampaignResponse {
        campaign_id,
        recipient_count: recipients.len(),
    })
}
