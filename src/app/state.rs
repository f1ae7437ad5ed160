use crossterm::event::KeyCode;
use log::warn;
use rusqlite::Connection;

use crate::clipboard;
use crate::db;
use crate::session::PaletteSession;
use crate::store::PaletteStore;
use crate::types::Palette;
use crate::ui::theme::{THEME_KEY, ThemeMode};

use super::{AppEvent, Pane};

// Status messages linger for ~2 seconds at the 250 ms tick rate.
const STATUS_TICKS: u8 = 8;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub store: PaletteStore,
    pub session: PaletteSession,
    pub saved: Vec<Palette>,
    pub pane: Pane,
    pub selected_color_index: usize,
    pub selected_saved_index: usize,
    pub status: Option<String>,
    status_ticks: u8,
    pub theme: ThemeMode,
}

impl App {
    pub fn new(conn: Connection) -> Self {
        let theme = load_theme(&conn);
        let store = PaletteStore::open(conn);
        let saved = store.list();
        let mut session = PaletteSession::new();
        session.regenerate();
        Self {
            running: true,
            store,
            session,
            saved,
            pane: Pane::Current,
            selected_color_index: 0,
            selected_saved_index: 0,
            status: None,
            status_ticks: 0,
            theme,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.expire_status(),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('g') => self.generate(),
            KeyCode::Char('s') => self.save_current(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('c') => self.copy_selected_color(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.refresh_saved(),
            KeyCode::Tab => self.toggle_pane(),
            KeyCode::Left => {
                if self.pane == Pane::Current {
                    self.move_color_selection(-1);
                }
            }
            KeyCode::Right => {
                if self.pane == Pane::Current {
                    self.move_color_selection(1);
                }
            }
            KeyCode::Up => {
                if self.pane == Pane::Saved {
                    self.move_saved_selection(-1);
                }
            }
            KeyCode::Down => {
                if self.pane == Pane::Saved {
                    self.move_saved_selection(1);
                }
            }
            KeyCode::Enter => match self.pane {
                Pane::Current => self.copy_selected_color(),
                Pane::Saved => self.load_selected(),
            },
            _ => {}
        }
    }

    fn generate(&mut self) {
        self.session.regenerate();
        self.selected_color_index = 0;
        self.clear_status();
    }

    fn save_current(&mut self) {
        let palette = match self.session.snapshot() {
            Ok(palette) => palette,
            Err(_) => {
                self.set_status("Generate a palette first!");
                return;
            }
        };
        match self.store.add(palette) {
            Ok(()) => {
                self.refresh_saved();
                self.set_status("Palette saved.");
            }
            Err(err) => self.set_status(format!("Save failed: {err}")),
        }
    }

    fn delete_selected(&mut self) {
        if self.pane != Pane::Saved {
            return;
        }
        let Some(palette) = self.saved.get(self.selected_saved_index) else {
            return;
        };
        match self.store.delete_by_id(palette.id) {
            Ok(()) => {
                self.refresh_saved();
                self.set_status("Palette deleted.");
            }
            Err(err) => self.set_status(format!("Delete failed: {err}")),
        }
    }

    fn load_selected(&mut self) {
        let Some(palette) = self.saved.get(self.selected_saved_index) else {
            return;
        };
        self.session.load_from(palette);
        self.selected_color_index = 0;
        self.set_status(format!("Loaded palette from {}.", palette.created_on));
    }

    fn copy_selected_color(&mut self) {
        let Some(color) = self.session.colors().get(self.selected_color_index) else {
            return;
        };
        match clipboard::copy(color.as_str()) {
            Ok(()) => self.set_status(format!("Copied {color} to clipboard!")),
            Err(err) => warn!("could not copy to clipboard: {err}"),
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        if let Err(err) = db::set(THEME_KEY, self.theme.as_str(), self.store.conn()) {
            warn!("could not save theme preference: {err}");
        }
    }

    fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Current => Pane::Saved,
            Pane::Saved => Pane::Current,
        };
    }

    fn refresh_saved(&mut self) {
        self.saved = self.store.list();
        if self.selected_saved_index >= self.saved.len() {
            self.selected_saved_index = self.saved.len().saturating_sub(1);
        }
    }

    fn move_color_selection(&mut self, delta: isize) {
        let len = self.session.colors().len();
        if len == 0 {
            return;
        }
        let next = self.selected_color_index as isize + delta;
        self.selected_color_index = next.rem_euclid(len as isize) as usize;
    }

    fn move_saved_selection(&mut self, delta: isize) {
        let len = self.saved.len();
        if len == 0 {
            return;
        }
        let next = self.selected_saved_index as isize + delta;
        self.selected_saved_index = next.rem_euclid(len as isize) as usize;
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    fn clear_status(&mut self) {
        self.status = None;
        self.status_ticks = 0;
    }

    fn expire_status(&mut self) {
        if self.status.is_some() {
            self.status_ticks = self.status_ticks.saturating_sub(1);
            if self.status_ticks == 0 {
                self.status = None;
            }
        }
    }
}

fn load_theme(conn: &Connection) -> ThemeMode {
    match db::get(THEME_KEY, conn) {
        Ok(Some(value)) => ThemeMode::parse(&value),
        Ok(None) => ThemeMode::Dark,
        Err(err) => {
            warn!("could not read theme preference: {err}");
            ThemeMode::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(crate::db::init_in_memory().unwrap())
    }

    #[test]
    fn starts_with_a_generated_palette() {
        let app = test_app();
        assert_eq!(app.session.colors().len(), crate::types::PALETTE_SIZE);
        assert!(app.saved.is_empty());
    }

    #[test]
    fn save_key_persists_the_working_palette() {
        let mut app = test_app();
        app.update(AppEvent::KeyPress(KeyCode::Char('s')));
        assert_eq!(app.saved.len(), 1);
        assert_eq!(app.saved[0].colors, app.session.colors().to_vec());
        assert_eq!(app.status.as_deref(), Some("Palette saved."));
    }

    #[test]
    fn delete_key_removes_the_selected_palette() {
        let mut app = test_app();
        app.update(AppEvent::KeyPress(KeyCode::Char('s')));
        app.update(AppEvent::KeyPress(KeyCode::Tab));
        app.update(AppEvent::KeyPress(KeyCode::Char('d')));
        assert!(app.saved.is_empty());
        assert!(app.store.list().is_empty());
    }

    #[test]
    fn enter_on_saved_pane_loads_the_palette() {
        let mut app = test_app();
        app.update(AppEvent::KeyPress(KeyCode::Char('s')));
        let saved_colors = app.saved[0].colors.clone();
        app.update(AppEvent::KeyPress(KeyCode::Char('g')));
        app.update(AppEvent::KeyPress(KeyCode::Tab));
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        assert_eq!(app.session.colors(), saved_colors.as_slice());
    }

    #[test]
    fn color_selection_wraps_around() {
        let mut app = test_app();
        app.update(AppEvent::KeyPress(KeyCode::Left));
        assert_eq!(app.selected_color_index, crate::types::PALETTE_SIZE - 1);
        app.update(AppEvent::KeyPress(KeyCode::Right));
        assert_eq!(app.selected_color_index, 0);
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let mut app = test_app();
        assert_eq!(app.theme, ThemeMode::Dark);
        app.update(AppEvent::KeyPress(KeyCode::Char('t')));
        assert_eq!(app.theme, ThemeMode::Light);
        assert_eq!(
            db::get(THEME_KEY, app.store.conn()).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn status_expires_after_enough_ticks() {
        let mut app = test_app();
        app.update(AppEvent::KeyPress(KeyCode::Char('s')));
        assert!(app.status.is_some());
        for _ in 0..STATUS_TICKS {
            app.update(AppEvent::Tick);
        }
        assert!(app.status.is_none());
    }
}
