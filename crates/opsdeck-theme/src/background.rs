//! Background composition mode and settings.

use opsdeck_common::Color;
use serde::{Deserialize, Serialize};

/// How the page-level container is filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    #[default]
    None,
    Solid,
    Gradient,
    Pattern,
}

impl BackgroundMode {
    pub const ALL: [BackgroundMode; 4] = [
        BackgroundMode::None,
        BackgroundMode::Solid,
        BackgroundMode::Gradient,
        BackgroundMode::Pattern,
    ];
}

/// The four tiled background patterns.
///
/// Each pattern is a fixed CSS image-generator expression drawn in a
/// neutral slate ink, parameterized only by opacity, plus a fixed tile
/// size. No urls, no external assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Dots,
    Grid,
    Stripes,
    Crosshatch,
}

/// The ink color shared by all pattern expressions.
const PATTERN_INK: Color = Color::rgb(148, 163, 184);

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Dots,
        PatternKind::Grid,
        PatternKind::Stripes,
        PatternKind::Crosshatch,
    ];

    /// The `background-image` expression, with `opacity` (0-100) applied
    /// as the ink's alpha channel. The value passes through unclamped.
    pub fn image_expression(self, opacity: f64) -> String {
        let ink = PATTERN_INK.to_css_rgba(opacity / 100.0);
        match self {
            PatternKind::Dots => {
                format!("radial-gradient(circle, {ink} 1px, transparent 1px)")
            }
            PatternKind::Grid => format!(
                "linear-gradient({ink} 1px, transparent 1px), \
                 linear-gradient(90deg, {ink} 1px, transparent 1px)"
            ),
            PatternKind::Stripes => format!(
                "repeating-linear-gradient(45deg, {ink} 0, {ink} 1px, \
                 transparent 1px, transparent 12px)"
            ),
            PatternKind::Crosshatch => format!(
                "repeating-linear-gradient(45deg, {ink} 0, {ink} 1px, \
                 transparent 1px, transparent 10px), \
                 repeating-linear-gradient(-45deg, {ink} 0, {ink} 1px, \
                 transparent 1px, transparent 10px)"
            ),
        }
    }

    /// The `background-size` tile for this pattern.
    pub const fn tile_size(self) -> &'static str {
        match self {
            PatternKind::Dots => "24px 24px",
            PatternKind::Grid => "32px 32px",
            PatternKind::Stripes => "auto",
            PatternKind::Crosshatch => "auto",
        }
    }
}

/// Background detail settings, consulted per mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSettings {
    /// Fill for `solid` mode; also the base color underneath `pattern`.
    pub solid_color: String,
    pub pattern_kind: PatternKind,
    /// 0-100, the pattern ink alpha. Unclamped.
    pub pattern_opacity: f64,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            solid_color: "#0f172a".into(),
            pattern_kind: PatternKind::Dots,
            pattern_opacity: 10.0,
        }
    }
}

/// Typed keys for field-wise background updates.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundField {
    SolidColor(String),
    PatternKind(PatternKind),
    PatternOpacity(f64),
}

impl BackgroundSettings {
    /// Write one field. Values are stored verbatim.
    pub fn set(&mut self, field: BackgroundField) {
        match field {
            BackgroundField::SolidColor(color) => self.solid_color = color,
            BackgroundField::PatternKind(kind) => self.pattern_kind = kind,
            BackgroundField::PatternOpacity(opacity) => self.pattern_opacity = opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_expression_carries_opacity_as_alpha() {
        let expr = PatternKind::Dots.image_expression(10.0);
        assert_eq!(
            expr,
            "radial-gradient(circle, rgba(148, 163, 184, 0.1) 1px, transparent 1px)"
        );
    }

    #[test]
    fn grid_expression_has_two_layers() {
        let expr = PatternKind::Grid.image_expression(50.0);
        assert_eq!(expr.matches("linear-gradient(").count(), 2);
        assert!(expr.contains("rgba(148, 163, 184, 0.5)"));
    }

    #[test]
    fn every_pattern_has_a_tile_size() {
        for kind in PatternKind::ALL {
            assert!(!kind.tile_size().is_empty());
        }
    }

    #[test]
    fn no_pattern_references_external_assets() {
        for kind in PatternKind::ALL {
            let expr = kind.image_expression(100.0);
            assert!(!expr.contains("url("), "{kind:?} uses url()");
        }
    }

    #[test]
    fn settings_default() {
        let s = BackgroundSettings::default();
        assert_eq!(s.solid_color, "#0f172a");
        assert_eq!(s.pattern_kind, PatternKind::Dots);
        assert_eq!(s.pattern_opacity, 10.0);
    }

    #[test]
    fn set_updates_single_field() {
        let mut s = BackgroundSettings::default();
        s.set(BackgroundField::PatternKind(PatternKind::Crosshatch));
        assert_eq!(s.pattern_kind, PatternKind::Crosshatch);
        assert_eq!(s.solid_color, "#0f172a");

        s.set(BackgroundField::SolidColor("#111827".into()));
        assert_eq!(s.solid_color, "#111827");

        s.set(BackgroundField::PatternOpacity(250.0));
        assert_eq!(s.pattern_opacity, 250.0); // unclamped
    }

    #[test]
    fn mode_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&BackgroundMode::Gradient).unwrap(),
            "\"gradient\""
        );
        assert_eq!(
            serde_json::to_string(&BackgroundMode::None).unwrap(),
            "\"none\""
        );
    }
}
