//! CSS generation from engine projections.
//!
//! Maps the theme engine's derived values onto CSS custom properties and
//! produces the `:root` block / injection JS the dashboard webview
//! consumes. Every value passes through the sanitizer first; invalid
//! values are skipped with a warning log.

use crate::sanitize::{
    validate_css_color, validate_css_image, validate_css_numeric, validate_css_size,
};
use opsdeck_theme::{ComposedBackground, ThemeEngine};

/// The type of validation to apply to a CSS value.
#[derive(Debug, Clone, Copy)]
pub enum CssValueKind {
    /// Hex or rgb()/rgba() color.
    Color,
    /// Numeric value with optional unit.
    Numeric,
    /// Gradient image-generator expression.
    Image,
    /// Tile size / keyword value.
    Size,
}

fn validate(value: &str, kind: CssValueKind) -> Result<(), String> {
    match kind {
        CssValueKind::Color => validate_css_color(value),
        CssValueKind::Numeric => validate_css_numeric(value),
        CssValueKind::Image => validate_css_image(value),
        CssValueKind::Size => validate_css_size(value),
    }
}

/// Map an engine's current projections to CSS variable triples.
///
/// These are the custom property names the dashboard's stylesheets bind
/// to (navigation highlight bar, page backgrounds, button gradients).
pub fn engine_css_variables(engine: &ThemeEngine) -> Vec<(String, String, CssValueKind)> {
    let primary = engine.primary_colors();
    let accent = engine.accent_colors();
    let gradient = engine.gradient_color_string();
    let intensity = engine.config().geometry.intensity / 100.0;

    vec![
        (
            "--theme-gradient".into(),
            gradient.as_str().to_owned(),
            CssValueKind::Image,
        ),
        (
            "--theme-primary-from".into(),
            primary.from.into(),
            CssValueKind::Color,
        ),
        (
            "--theme-primary-to".into(),
            primary.to.into(),
            CssValueKind::Color,
        ),
        (
            "--theme-accent-light".into(),
            accent.from.into(),
            CssValueKind::Color,
        ),
        (
            "--theme-accent-dark".into(),
            accent.to.into(),
            CssValueKind::Color,
        ),
        (
            "--theme-intensity".into(),
            intensity.to_string(),
            CssValueKind::Numeric,
        ),
    ]
}

/// Generate a CSS `:root { ... }` block from variable triples.
///
/// Returns CSS ready for injection via `<style>` or `evaluate_script`.
pub fn generate_css_root(variables: &[(String, String, CssValueKind)]) -> String {
    let mut css = String::from(":root {\n");

    for (name, value, kind) in variables {
        match validate(value, *kind) {
            Ok(()) => {
                css.push_str(&format!("  {name}: {value};\n"));
            }
            Err(e) => {
                tracing::warn!(
                    name = name.as_str(),
                    value = value.as_str(),
                    error = %e,
                    "Theme variable rejected by sanitizer"
                );
            }
        }
    }

    css.push('}');
    css
}

/// Generate a JavaScript snippet that injects the variables live.
///
/// Uses `document.documentElement.style.setProperty()` per variable,
/// which updates them without a page reload.
pub fn generate_css_injection_js(variables: &[(String, String, CssValueKind)]) -> String {
    let mut js = String::from("(function() {\n  var s = document.documentElement.style;\n");

    for (name, value, kind) in variables {
        if validate(value, *kind).is_ok() {
            // Escape for JS string literal
            let escaped_value = value.replace('\\', "\\\\").replace('\'', "\\'");
            let escaped_name = name.replace('\\', "\\\\").replace('\'', "\\'");
            js.push_str(&format!(
                "  s.setProperty('{escaped_name}', '{escaped_value}');\n"
            ));
        } else {
            tracing::warn!(
                name = name.as_str(),
                value = value.as_str(),
                "Theme variable rejected by sanitizer"
            );
        }
    }

    js.push_str("})();");
    js
}

/// Generate a rule block applying a composed background to `selector`.
///
/// An empty composition produces an empty rule, which is inert CSS.
pub fn generate_background_css(selector: &str, background: &ComposedBackground) -> String {
    let mut css = format!("{selector} {{\n");

    for (property, value) in background.declarations() {
        let kind = match property {
            "background-color" => CssValueKind::Color,
            "background" | "background-image" => CssValueKind::Image,
            "opacity" => CssValueKind::Numeric,
            _ => CssValueKind::Size,
        };

        match validate(&value, kind) {
            Ok(()) => {
                css.push_str(&format!("  {property}: {value};\n"));
            }
            Err(e) => {
                tracing::warn!(
                    property,
                    value = value.as_str(),
                    error = %e,
                    "Background declaration rejected by sanitizer"
                );
            }
        }
    }

    css.push('}');
    css
}
