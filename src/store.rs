/// Saved-palette persistence over the key-value table.
use anyhow::Result;
use log::warn;
use rusqlite::Connection;
use thiserror::Error;

use crate::db;
use crate::types::{Palette, PaletteId};

/// Storage key the whole saved-palette collection lives under.
const SAVED_PALETTES_KEY: &str = "saved-palettes";

/// A durable write failed. The in-memory working palette is unaffected;
/// the save simply did not happen.
#[derive(Debug, Error)]
#[error("could not persist saved palettes: {0}")]
pub struct PersistenceError(#[from] anyhow::Error);

/// The saved-palette collection, serialized as one JSON blob. Mutations are
/// whole-collection read-modify-write; run each to completion before starting
/// the next.
pub struct PaletteStore {
    conn: Connection,
}

impl PaletteStore {
    pub fn open(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Returns all saved palettes, oldest first. Missing or malformed stored
    /// data reads as an empty collection; the anomaly is logged, never
    /// surfaced.
    pub fn list(&self) -> Vec<Palette> {
        let raw = match db::get(SAVED_PALETTES_KEY, &self.conn) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("could not read saved palettes: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(palettes) => palettes,
            Err(err) => {
                warn!("ignoring malformed saved palettes: {err}");
                Vec::new()
            }
        }
    }

    /// Appends a palette to the stored collection.
    pub fn add(&self, palette: Palette) -> Result<(), PersistenceError> {
        let mut palettes = self.list();
        palettes.push(palette);
        self.write(&palettes)
    }

    /// Removes the palette with the given id. Absent ids are a no-op.
    pub fn delete_by_id(&self, id: PaletteId) -> Result<(), PersistenceError> {
        let mut palettes = self.list();
        palettes.retain(|palette| palette.id != id);
        self.write(&palettes)
    }

    fn write(&self, palettes: &[Palette]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(palettes).map_err(anyhow::Error::new)?;
        db::set(SAVED_PALETTES_KEY, &raw, &self.conn)?;
        Ok(())
    }
}
