use serde::{Deserialize, Serialize};

/// A pre-approved WhatsApp message template.
///
/// The body contains numbered placeholders (`{{1}}`, `{{2}}`, ...);
/// `variable_count` is derived from the highest placeholder number when
/// the template is saved and drives how many dynamic variables every
/// CSV data row must supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub id: String,
    pub name: String,
    pub body: String,
    pub variable_count: usize,
}
