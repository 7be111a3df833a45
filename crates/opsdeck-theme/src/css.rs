//! CSS gradient string construction.
//!
//! Pure string building: no syntax validation of the output, no clamping
//! of the inputs. Malformed geometry produces malformed-but-parseable CSS
//! that the browser renders with its own fallback behavior.

use crate::geometry::{GradientGeometry, GradientShape};
use crate::palette::Palette;
use opsdeck_common::Color;

/// Convert a palette hex string plus alpha into an `rgba()` stop.
///
/// Palette hex values are compile-time constants, so the parse cannot
/// fail in practice; a malformed string would fall back to black.
fn rgba_stop(hex: &str, alpha: f64) -> String {
    Color::from_hex(hex).unwrap_or_default().to_css_rgba(alpha)
}

/// Build the gradient color string for the given inputs.
///
/// Intensity (0-100) becomes the alpha channel of both stops. Shape
/// selects the CSS gradient function:
///
/// - linear and diagonal emit a two-stop `linear-gradient` at `angle`
/// - radial reuses `spread` as the horizontal center position
/// - conic is a three-stop gradient that returns to the from-color,
///   with `spread` as the middle stop
pub fn gradient_color_string(
    palette: Palette,
    shape: GradientShape,
    geometry: &GradientGeometry,
) -> String {
    let pair = palette.primary_colors();
    let alpha = geometry.intensity / 100.0;
    let from = rgba_stop(pair.from, alpha);
    let to = rgba_stop(pair.to, alpha);

    let start = geometry.start_position;
    let end = geometry.end_position;

    match shape {
        GradientShape::Linear | GradientShape::Diagonal => format!(
            "linear-gradient({}deg, {from} {start}%, {to} {end}%)",
            geometry.angle
        ),
        GradientShape::Radial => format!(
            "radial-gradient(circle at {}% 50%, {from} {start}%, {to} {end}%)",
            geometry.spread
        ),
        GradientShape::Conic => format!(
            "conic-gradient(from {}deg at 50% 50%, {from} {start}%, {to} {}%, {from} {end}%)",
            geometry.angle, geometry.spread
        ),
    }
}
