/// SQLite-backed key-value storage and migrations.
mod kv;
mod migrations;

use anyhow::Result;
use rusqlite::Connection;

pub use kv::{get, set};

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./swatchr.db` when no data dir is found.
pub fn default_db_path() -> String {
    if let Some(data_dir) = dirs::data_local_dir() {
        let swatchr_dir = data_dir.join("swatchr");
        std::fs::create_dir_all(&swatchr_dir).ok();
        swatchr_dir.join("swatchr.db").to_string_lossy().into_owned()
    } else {
        "swatchr.db".to_string()
    }
}

#[cfg(test)]
pub fn init_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}
