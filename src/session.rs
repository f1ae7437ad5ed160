/// The working palette: the in-memory color set the user is editing.
use chrono::Local;
use thiserror::Error;

use crate::color::{self, Color};
use crate::types::{PALETTE_SIZE, Palette, PaletteId};

/// Saving was attempted before any palette existed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("no colors in the working palette yet")]
pub struct EmptyPalette;

/// Holds the current working set of colors and hands out snapshots for
/// saving. Starts empty; the TUI generates once at startup.
pub struct PaletteSession {
    current: Vec<Color>,
    last_id: PaletteId,
}

impl PaletteSession {
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
            last_id: 0,
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Replaces the working set with a fresh random palette. The previous
    /// working set is gone unless it was saved.
    pub fn regenerate(&mut self) {
        self.current = color::generate_palette(PALETTE_SIZE);
    }

    /// Replaces the working set with a saved palette's colors.
    pub fn load_from(&mut self, palette: &Palette) {
        self.current = palette.colors.clone();
    }

    /// Captures the working set as a new palette, dated today.
    pub fn snapshot(&mut self) -> Result<Palette, EmptyPalette> {
        if self.current.is_empty() {
            return Err(EmptyPalette);
        }
        Ok(Palette {
            id: self.next_id(),
            colors: self.current.clone(),
            created_on: Local::now().format("%x").to_string(),
        })
    }

    // Millisecond timestamps, bumped past the previous id so that two saves
    // inside the same millisecond still get distinct ids.
    fn next_id(&mut self) -> PaletteId {
        let now = Local::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}
