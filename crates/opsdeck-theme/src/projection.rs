//! Derived projection types: the class bundle and the composed background.

use crate::background::{BackgroundMode, BackgroundSettings};
use crate::config::ThemeConfig;
use crate::css;
use crate::geometry::GradientShape;
use crate::palette::Palette;
use serde::Serialize;

/// Utility class tokens for consumers that prefer class-based styling
/// over inline styles. Derived from palette and shape only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleClassBundle {
    /// Combined gradient utility, e.g. `bg-gradient-to-r from-violet-500 to-purple-600`.
    pub gradient: String,
    pub text: &'static str,
    pub border: &'static str,
}

impl StyleClassBundle {
    pub fn for_combination(palette: Palette, shape: GradientShape) -> Self {
        let tokens = palette.class_tokens();
        Self {
            gradient: format!("{} {} {}", shape.class_token(), tokens.from, tokens.to),
            text: tokens.text,
            border: tokens.border,
        }
    }
}

/// The style object applied to a page-level container.
///
/// The shape depends on the background mode: `none` sets nothing and
/// serializes to `{}`. Property names serialize in camelCase so the
/// object can be spread directly onto an element's inline style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedBackground {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_size: Option<String>,
}

impl ComposedBackground {
    /// Compose the background style for the given configuration.
    ///
    /// In gradient mode the intensity is applied twice on purpose: baked
    /// into the rgba stops and again as element-level opacity. That is
    /// the shipped behavior, kept verbatim.
    pub fn compose(config: &ThemeConfig) -> Self {
        let settings: &BackgroundSettings = &config.background;
        match config.background_mode {
            BackgroundMode::None => Self::default(),
            BackgroundMode::Solid => Self {
                background_color: Some(settings.solid_color.clone()),
                ..Self::default()
            },
            BackgroundMode::Gradient => Self {
                background: Some(css::gradient_color_string(
                    config.palette,
                    config.gradient_shape,
                    &config.geometry,
                )),
                opacity: Some(config.geometry.intensity / 100.0),
                ..Self::default()
            },
            BackgroundMode::Pattern => Self {
                background_color: Some(settings.solid_color.clone()),
                background_image: Some(
                    settings
                        .pattern_kind
                        .image_expression(settings.pattern_opacity),
                ),
                background_size: Some(settings.pattern_kind.tile_size().to_string()),
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The set properties as CSS declarations, in a fixed order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(v) = &self.background_color {
            out.push(("background-color", v.clone()));
        }
        if let Some(v) = &self.background {
            out.push(("background", v.clone()));
        }
        if let Some(v) = self.opacity {
            out.push(("opacity", v.to_string()));
        }
        if let Some(v) = &self.background_image {
            out.push(("background-image", v.clone()));
        }
        if let Some(v) = &self.background_size {
            out.push(("background-size", v.clone()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::{BackgroundField, PatternKind};

    #[test]
    fn class_bundle_combines_shape_and_palette_tokens() {
        let bundle =
            StyleClassBundle::for_combination(Palette::Purple, GradientShape::Linear);
        assert_eq!(
            bundle.gradient,
            "bg-gradient-to-r from-violet-500 to-purple-600"
        );
        assert_eq!(bundle.text, "text-violet-400");
        assert_eq!(bundle.border, "border-violet-500");
    }

    #[test]
    fn class_bundle_covers_all_combinations() {
        let mut seen = std::collections::HashSet::new();
        for palette in Palette::ALL {
            for shape in GradientShape::ALL {
                let bundle = StyleClassBundle::for_combination(palette, shape);
                assert!(seen.insert(bundle.gradient.clone()));
            }
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn none_mode_serializes_to_empty_object() {
        let config = ThemeConfig::default();
        let bg = ComposedBackground::compose(&config);
        assert!(bg.is_empty());
        assert_eq!(serde_json::to_value(&bg).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn solid_mode_sets_only_background_color() {
        let mut config = ThemeConfig::default();
        config.background_mode = BackgroundMode::Solid;
        let bg = ComposedBackground::compose(&config);
        assert_eq!(bg.background_color.as_deref(), Some("#0f172a"));
        assert!(bg.background.is_none());
        assert!(bg.opacity.is_none());
        assert!(bg.background_image.is_none());
    }

    #[test]
    fn gradient_mode_applies_opacity_twice() {
        let mut config = ThemeConfig::default();
        config.background_mode = BackgroundMode::Gradient;
        config.geometry.intensity = 50.0;
        let bg = ComposedBackground::compose(&config);

        // alpha baked into the stops
        assert!(bg.background.as_deref().unwrap().contains(", 0.5)"));
        // and reapplied at element level
        assert_eq!(bg.opacity, Some(0.5));
    }

    #[test]
    fn pattern_mode_sets_base_image_and_tile() {
        let mut config = ThemeConfig::default();
        config.background_mode = BackgroundMode::Pattern;
        config
            .background
            .set(BackgroundField::PatternKind(PatternKind::Grid));
        let bg = ComposedBackground::compose(&config);
        assert_eq!(bg.background_color.as_deref(), Some("#0f172a"));
        assert!(bg.background_image.as_deref().unwrap().contains("linear-gradient("));
        assert_eq!(bg.background_size.as_deref(), Some("32px 32px"));
        assert!(bg.opacity.is_none());
    }

    #[test]
    fn serialized_property_names_are_camel_case() {
        let mut config = ThemeConfig::default();
        config.background_mode = BackgroundMode::Solid;
        let value = serde_json::to_value(ComposedBackground::compose(&config)).unwrap();
        assert!(value.get("backgroundColor").is_some());
    }

    #[test]
    fn declarations_follow_mode_shape() {
        let mut config = ThemeConfig::default();
        config.background_mode = BackgroundMode::Gradient;
        let decls = ComposedBackground::compose(&config).declarations();
        let names: Vec<&str> = decls.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["background", "opacity"]);
    }
}
