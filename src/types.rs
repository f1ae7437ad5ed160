use serde::{Deserialize, Serialize};

use crate::color::Color;

pub type PaletteId = i64;

/// Number of colors in a palette.
pub const PALETTE_SIZE: usize = 5;

/// A saved palette: five colors plus the date it was saved on.
///
/// Immutable once stored; the `date` string is display-only. The field name
/// matches the persisted record so existing blobs keep loading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub id: PaletteId,
    pub colors: Vec<Color>,
    #[serde(rename = "date")]
    pub created_on: String,
}
