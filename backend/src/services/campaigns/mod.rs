//! # Campaign Service Module
//!
//! Endpoints for turning a validated recipient set into a stored
//! campaign. Creation is the confirmation gate of the import flow: CSV
//! rows are re-validated server-side and refused all-or-nothing if any
//! row fails, mirroring the disabled submit button in the preview UI.
//!
//! ## Sub-modules:
//! - `create`: validates a recipient source and persists the campaign.
//! - `get`: retrieves a stored campaign summary by id.

mod create;
mod get;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/campaigns";

/// Configures and returns the Actix `Scope` for all campaign routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/create", post().to(create::process))
        .route("/{campaign_id}", get().to(get::process))
}
