use serde::{Deserialize, Serialize};

/// One campaign recipient, typically produced from a single CSV data row.
///
/// `dynamic_variables` is positional: the value at index 0 fills the
/// template's `{{1}}` placeholder, index 1 fills `{{2}}`, and so on.
/// Values are matched to placeholders by index, never by name, so the
/// column order of an uploaded CSV must follow the template's declared
/// placeholder order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// WhatsApp number in the `91XXXXXXXXXX` format (country code `91`
    /// followed by exactly ten digits, no `+`, no spaces).
    pub mobile_number: String,
    /// Template placeholder values, in placeholder order.
    pub dynamic_variables: Vec<String>,
}
