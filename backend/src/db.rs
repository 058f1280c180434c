//! SQLite schema setup.
//!
//! Connections are opened per operation by the service handlers; this
//! module only makes sure the tables exist before the server starts
//! accepting requests. `dynamic_variables` is stored as a JSON array
//! string so the positional ordering of values survives persistence.

use rusqlite::Connection;

pub fn init_db(path: &str) -> Result<(), String> {
    let conn = Connection::open(path).map_err(|e| e.to_string())?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS templates (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            body TEXT NOT NULL,
            variable_count INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS campaigns (
            id TEXT PRIMARY KEY,
            template_id TEXT NOT NULL,
            source TEXT NOT NULL,
            group_id TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE TABLE IF NOT EXISTS recipients (
            campaign_id TEXT NOT NULL,
            position INTEGER NOT NULL,
            mobile_number TEXT NOT NULL,
            variables_json TEXT NOT NULL,
            PRIMARY KEY (campaign_id, position)
        );",
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}
