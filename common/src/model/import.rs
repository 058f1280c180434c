//! Import confirmation gate.
//!
//! Models the lifecycle of a CSV upload as explicit data instead of UI
//! component state, so both the frontend and the backend enforce the same
//! rule: a campaign may only take its recipients from an upload whose
//! validation produced zero errors and at least one valid row.
//!
//! The machine has three stages:
//!
//! ```text
//! Idle --upload--> Previewing --confirm--> Confirmed
//!   ^                  |  ^
//!   +-----cancel-------+  +--upload (fresh result, stale one discarded)
//! ```
//!
//! `confirm` is the all-or-nothing gate: while any row error exists the
//! transition is refused and the stage is returned unchanged, even though
//! the result still carries every individually valid row.

use crate::model::recipient::Recipient;
use crate::model::validation::ValidationResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImportStage {
    /// No file chosen.
    Idle,
    /// A file was parsed and validated; the result is on display.
    Previewing(ValidationResult),
    /// The user accepted the valid rows as the campaign recipient set.
    Confirmed(Vec<Recipient>),
}

impl ImportStage {
    /// A file was uploaded and validated. Always enters `Previewing` with
    /// the fresh result; any stale result is discarded.
    pub fn upload(self, result: ValidationResult) -> ImportStage {
        ImportStage::Previewing(result)
    }

    /// The user cancelled. Discards whatever was being previewed.
    pub fn cancel(self) -> ImportStage {
        ImportStage::Idle
    }

    /// Whether the confirm action is currently enabled.
    pub fn can_confirm(&self) -> bool {
        match self {
            ImportStage::Previewing(result) => result.is_valid && !result.valid_rows.is_empty(),
            _ => false,
        }
    }

    /// The user accepted the previewed rows. Only permitted from
    /// `Previewing` with a fully valid, non-empty result; otherwise the
    /// action is inert and the stage comes back unchanged.
    pub fn confirm(self) -> ImportStage {
        if self.can_confirm() {
            match self {
                ImportStage::Previewing(result) => ImportStage::Confirmed(result.valid_rows),
                _ => unreachable!(),
            }
        } else {
            self
        }
    }
}
