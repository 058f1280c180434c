use crate::model::recipient::Recipient;
use serde::{Deserialize, Serialize};

/// Request payload for the template save endpoint. The backend derives
/// the template's variable count from the `{{n}}` placeholders in `body`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTemplateRequest {
    pub id: String,
    pub name: String,
    pub body: String,
}

/// Where the recipients of a new campaign come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecipientSource {
    /// Rows confirmed from a CSV import preview. Re-validated server-side;
    /// refused outright if any row fails.
    CsvRows(Vec<Recipient>),
    /// Manually typed phone numbers. Format-checked and rejected on
    /// duplicates, unlike the CSV path.
    Manual(Vec<String>),
    /// An existing contact group, resolved by the messaging backend.
    Group(String),
}

/// Request payload for campaign creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCampaignRequest {
    pub template_id: String,
    pub source: RecipientSource,
}
