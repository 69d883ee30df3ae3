//! Stil-Auflösung für Marker: Subtyp > Kategorie > Standard.

use super::catalog::{Catalog, SubtypeKey};

/// Standard-Pin-Farbe, wenn weder Subtyp noch Kategorie eine Farbe setzen.
pub const DEFAULT_MARKER_COLOR: &str = "#E53935";
/// Standard-Icon-Name.
pub const DEFAULT_MARKER_ICON: &str = "circle-dot";

/// Aufgelöster Anzeige-Stil eines Subtyps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle<'a> {
    pub color: &'a str,
    pub icon: &'a str,
}

/// Ermittelt Farbe und Icon eines Subtyps.
pub fn resolve_style<'a>(catalog: &'a Catalog, key: &SubtypeKey) -> MarkerStyle<'a> {
    let category = catalog.categories.iter().find(|c| c.id == key.category());
    let subtype = category.and_then(|c| c.subtypes.iter().find(|s| s.id == key.subtype()));

    let color = subtype
        .and_then(|s| s.color.as_deref())
        .or_else(|| category.and_then(|c| c.color.as_deref()))
        .unwrap_or(DEFAULT_MARKER_COLOR);
    let icon = subtype
        .and_then(|s| s.icon.as_deref())
        .or_else(|| category.and_then(|c| c.icon.as_deref()))
        .unwrap_or(DEFAULT_MARKER_ICON);

    MarkerStyle { color, icon }
}

/// Parst `#RRGGBB` bzw. `#RRGGBBAA` in RGBA-Bytes.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 4]> {
    let digits = hex.strip_prefix('#')?;
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    match digits.len() {
        6 => Some([channel(0)?, channel(2)?, channel(4)?, 255]),
        8 => Some([channel(0)?, channel(2)?, channel(4)?, channel(6)?]),
        _ => None,
    }
}
