use ratatui::style::Color as TermColor;

use crate::color::Color;

/// Maps a canonical `#RRGGBB` color onto a terminal RGB color. Colors that
/// kept a non-hex form (fallback path) render as `None`.
pub fn term_color(color: &Color) -> Option<TermColor> {
    let hex = color.as_str().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(TermColor::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_map_to_rgb() {
        let color = Color::parse("#FF0080");
        assert_eq!(term_color(&color), Some(TermColor::Rgb(255, 0, 128)));
    }

    #[test]
    fn non_hex_colors_do_not_map() {
        let color = Color::parse("definitely not a color");
        assert_eq!(term_color(&color), None);
    }
}
