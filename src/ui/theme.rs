use ratatui::style::Color;

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "palette-theme";

/// Light/dark color scheme, persisted between runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Primary branding color
    pub fn primary(self) -> Color {
        match self {
            ThemeMode::Light => Color::Blue,
            ThemeMode::Dark => Color::Magenta,
        }
    }

    /// Secondary/border color
    pub fn secondary(self) -> Color {
        Color::Cyan
    }

    /// Selection/highlight
    pub fn highlight(self) -> Color {
        match self {
            ThemeMode::Light => Color::Blue,
            ThemeMode::Dark => Color::Cyan,
        }
    }

    /// Dimmed/inactive text
    pub fn dim(self) -> Color {
        match self {
            ThemeMode::Light => Color::Gray,
            ThemeMode::Dark => Color::DarkGray,
        }
    }

    /// Normal text
    pub fn text(self) -> Color {
        match self {
            ThemeMode::Light => Color::Black,
            ThemeMode::Dark => Color::White,
        }
    }

    /// Accent for ids/dates
    pub fn accent(self) -> Color {
        match self {
            ThemeMode::Light => Color::Blue,
            ThemeMode::Dark => Color::LightBlue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_both_modes() {
        assert_eq!(ThemeMode::parse("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse(ThemeMode::Light.as_str()), ThemeMode::Light);
    }

    #[test]
    fn unknown_preference_falls_back_to_dark() {
        assert_eq!(ThemeMode::parse("solarized"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse(""), ThemeMode::Dark);
    }

    #[test]
    fn toggle_alternates() {
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
    }
}
