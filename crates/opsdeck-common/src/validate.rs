//! Color string format validation.
//!
//! Supports `#RRGGBB` hex and `rgba(r,g,b,a)` with a float alpha. Used at
//! the persistence boundary to catch malformed colors before they reach
//! rendered CSS; the theme engine itself never validates.

use crate::errors::ConfigError;
use crate::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for a 6-digit hex color.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Regex for rgba() with float or int alpha.
static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*[0-9]*\.?[0-9]+\s*)?\)$")
        .unwrap()
});

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGBA_RE.is_match(s);
    }
    false
}

/// Parse a hex color string into a [`Color`].
///
/// Only the `#RRGGBB` form maps onto [`Color`]; `rgba()` strings carry an
/// alpha this type does not store and are rejected here.
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();
    if HEX_RE.is_match(s) {
        if let Some(color) = Color::from_hex(s) {
            return Ok(color);
        }
    }
    Err(ConfigError::ParseError(format!("invalid hex color: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_hex_and_rgba() {
        assert!(validate_color("#8b5cf6"));
        assert!(validate_color("#0F172A"));
        assert!(validate_color("rgba(139, 92, 246, 0.5)"));
        assert!(validate_color("rgba(139,92,246,1)"));
        assert!(validate_color("rgb(148, 163, 184)"));
    }

    #[test]
    fn validate_rejects_malformed() {
        assert!(!validate_color(""));
        assert!(!validate_color("not-a-color"));
        assert!(!validate_color("#fff"));
        assert!(!validate_color("#12345"));
        assert!(!validate_color("#1234567"));
        assert!(!validate_color("rgb(10,20)"));
        assert!(!validate_color("rgba(1,2,3,0.5); } body { color: red"));
    }

    #[test]
    fn parse_hex_color() {
        let c = parse_color("#10b981").unwrap();
        assert_eq!(c, Color::rgb(16, 185, 129));
    }

    #[test]
    fn parse_rejects_rgba_strings() {
        assert!(parse_color("rgba(139, 92, 246, 0.5)").is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_color("").is_err());
        assert!(parse_color("#xyzxyz").is_err());
    }
}
