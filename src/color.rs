/// Color parsing, normalization and random generation.
use std::fmt;

use rand::RngExt;
use serde::{Deserialize, Serialize};

const HEX_DIGITS: &[u8] = b"0123456789ABCDEF";

/// A single palette color, held as canonical uppercase `#RRGGBB` text.
///
/// Stored data may carry colors in an `rgb(r, g, b)`-shaped form; those are
/// normalized once, at construction, so nothing downstream has to inspect the
/// format again. Strings matching neither form are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Normalizes any supported textual form to canonical hex.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if is_valid_hex(value) {
            Color(value.to_ascii_uppercase())
        } else {
            Color(rgb_to_hex(value))
        }
    }

    /// Draws a random color: six independent uniform hex digits.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let mut color = String::with_capacity(7);
        color.push('#');
        for _ in 0..6 {
            color.push(HEX_DIGITS[rng.random_range(0..16)] as char);
        }
        Color(color)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Converts a string carrying exactly three embedded decimal channel values
/// (e.g. `rgb(18, 52, 86)`) to `#RRGGBB`. Any other input comes back
/// unchanged, including inputs where a channel does not fit in a byte.
pub fn rgb_to_hex(rgb: &str) -> String {
    let mut runs = Vec::new();
    let mut digits = String::new();
    for ch in rgb.chars().chain(std::iter::once(' ')) {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if !digits.is_empty() {
            runs.push(std::mem::take(&mut digits));
        }
    }
    if runs.len() != 3 {
        return rgb.to_string();
    }

    let mut channels = [0u8; 3];
    for (slot, run) in channels.iter_mut().zip(&runs) {
        match run.parse::<u8>() {
            Ok(value) => *slot = value,
            Err(_) => return rgb.to_string(),
        }
    }
    format!("#{:02X}{:02X}{:02X}", channels[0], channels[1], channels[2])
}

/// Produces `count` independent random colors. Repeats are allowed.
pub fn generate_palette(count: usize) -> Vec<Color> {
    (0..count).map(|_| Color::random()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex_converts_valid_triplets() {
        assert_eq!(rgb_to_hex("rgb(255, 87, 51)"), "#FF5733");
        assert_eq!(rgb_to_hex("rgb(0,0,0)"), "#000000");
        assert_eq!(rgb_to_hex("rgb(255, 255, 255)"), "#FFFFFF");
        assert_eq!(rgb_to_hex("rgb(1, 2, 3)"), "#010203");
    }

    #[test]
    fn rgb_to_hex_pads_single_digit_channels() {
        assert_eq!(rgb_to_hex("rgb(9, 10, 15)"), "#090A0F");
    }

    #[test]
    fn rgb_to_hex_returns_input_without_three_values() {
        assert_eq!(rgb_to_hex("#FF5733"), "#FF5733");
        assert_eq!(rgb_to_hex("not a color"), "not a color");
        assert_eq!(rgb_to_hex("rgb(1, 2)"), "rgb(1, 2)");
        assert_eq!(rgb_to_hex("rgba(1, 2, 3, 4)"), "rgba(1, 2, 3, 4)");
        assert_eq!(rgb_to_hex(""), "");
    }

    #[test]
    fn rgb_to_hex_returns_input_for_oversized_channels() {
        assert_eq!(rgb_to_hex("rgb(300, 0, 0)"), "rgb(300, 0, 0)");
        assert_eq!(rgb_to_hex("rgb(0, 999, 0)"), "rgb(0, 999, 0)");
    }

    #[test]
    fn parse_uppercases_hex_input() {
        assert_eq!(Color::parse("#ff5733").as_str(), "#FF5733");
        assert_eq!(Color::parse(" #abcdef ").as_str(), "#ABCDEF");
    }

    #[test]
    fn parse_normalizes_rgb_form() {
        assert_eq!(Color::parse("rgb(255, 87, 51)").as_str(), "#FF5733");
    }

    #[test]
    fn parse_is_idempotent_on_canonical_hex() {
        let once = Color::parse("rgb(12, 34, 56)");
        let twice = Color::parse(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn random_colors_are_well_formed() {
        for _ in 0..100 {
            let color = Color::random();
            assert!(is_valid_hex(color.as_str()), "bad color {color}");
            assert!(
                color.as_str()[1..]
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
            );
        }
    }

    #[test]
    fn generate_palette_has_requested_length() {
        assert_eq!(generate_palette(5).len(), 5);
        assert_eq!(generate_palette(0).len(), 0);
        for color in generate_palette(5) {
            assert!(is_valid_hex(color.as_str()));
        }
    }

    #[test]
    fn color_deserializes_from_rgb_form() {
        let color: Color = serde_json::from_str("\"rgb(255, 0, 128)\"").unwrap();
        assert_eq!(color.as_str(), "#FF0080");
    }

    #[test]
    fn color_serializes_as_plain_string() {
        let json = serde_json::to_string(&Color::parse("#A1B2C3")).unwrap();
        assert_eq!(json, "\"#A1B2C3\"");
    }
}
