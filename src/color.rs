use eframe::egui::Color32;
use palette::Srgb;

use crate::config::CHART_CONFIG;

// ---------------------------------------------------------------------------
// Hex colour parsing
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` (or `rrggbb`) into an egui colour.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let rgb: Srgb<u8> = hex.trim().parse().ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

fn hex_or(hex: &str, fallback: Color32) -> Color32 {
    parse_hex(hex).unwrap_or_else(|| {
        log::warn!("Invalid colour '{hex}', using fallback");
        fallback
    })
}

/// Stroke colour of the data line.
pub fn line_color() -> Color32 {
    hex_or(CHART_CONFIG.line_color_hex, Color32::from_rgb(230, 170, 104))
}

/// Colour of axis lines and tick labels.
pub fn axis_color() -> Color32 {
    hex_or(CHART_CONFIG.axis_color_hex, Color32::DARK_GRAY)
}

/// `color` at the given opacity (0 = invisible, 1 = unchanged).
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_colour() {
        assert_eq!(parse_hex("#E6AA68"), Some(Color32::from_rgb(0xE6, 0xAA, 0x68)));
        assert_eq!(parse_hex("444444"), Some(Color32::from_rgb(0x44, 0x44, 0x44)));
        assert_eq!(parse_hex("#nothex"), None);
        assert_eq!(line_color(), Color32::from_rgb(0xE6, 0xAA, 0x68));
    }

    #[test]
    fn opacity_fades_to_transparent() {
        let c = Color32::from_rgb(200, 100, 50);
        assert_eq!(with_opacity(c, 0.0), Color32::TRANSPARENT);
        assert_eq!(with_opacity(c, 1.0), c);
    }
}
