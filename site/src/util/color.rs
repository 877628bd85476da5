//! Colour helpers for tinting puzzle pieces and accents.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Neutral grey used when a colour string does not parse.
pub const FALLBACK_RGB: (u8, u8, u8) = (128, 128, 128);

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex.get(0..1)?.repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex.get(1..2)?.repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex.get(2..3)?.repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// CSS `rgba(...)` for `hex` at `alpha`, falling back to [`FALLBACK_RGB`].
pub fn rgba(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or(FALLBACK_RGB);
    format!("rgba({r},{g},{b},{alpha})")
}
