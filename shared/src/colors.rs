/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

/// Parse `#rrggbb` (or `rrggbb`).
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Translucent version of a hex fill, for card and legend backgrounds.
/// Falls back to the hex string itself when it cannot be parsed.
pub fn tint(hex: &str, alpha: f64) -> String {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => rgba_css(r, g, b, alpha),
        None => hex.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_hex_rgb, rgba_css, tint};

    #[test]
    fn parses_grade_fill_colors() {
        assert_eq!(parse_hex_rgb("#0ea5e9"), Some((14, 165, 233)));
        assert_eq!(parse_hex_rgb("e5e7eb"), Some((229, 231, 235)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex_rgb("#fff"), None);
        assert_eq!(parse_hex_rgb("#zzzzzz"), None);
        assert_eq!(parse_hex_rgb("#ééé"), None);
    }

    #[test]
    fn tint_formats_rgba() {
        assert_eq!(tint("#ef4444", 0.15), "rgba(239,68,68,0.15)");
        assert_eq!(tint("salmon", 0.15), "salmon");
        assert_eq!(rgba_css(1, 2, 3, 1.0), "rgba(1,2,3,1)");
    }
}
