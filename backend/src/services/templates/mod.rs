//! # Template Service Module
//!
//! Aggregates the API endpoints for managing WhatsApp message templates.
//! A template body carries numbered placeholders (`{{1}}`, `{{2}}`, ...)
//! and the save handler derives the template's variable count from them;
//! that count is what the CSV importer later validates uploads against.
//!
//! ## Sub-modules:
//! - `save`: creates or updates a template, deriving its variable count.
//! - `get`: retrieves a single template by id.

pub(crate) mod get;
pub(crate) mod save;

pub(crate) use get::get_template;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/{template_id}", get().to(get::process))
}
