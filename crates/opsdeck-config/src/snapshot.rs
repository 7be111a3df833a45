//! Snapshot and restore of engine state.
//!
//! Restore drives the engine exclusively through its setter operations,
//! so it behaves exactly like a user re-entering the saved configuration
//! (memoized projections invalidate field by field, nothing is bypassed).

use opsdeck_theme::{BackgroundField, GeometryField, ThemeConfig, ThemeEngine};

/// Capture the engine's current configuration.
pub fn capture(engine: &ThemeEngine) -> ThemeConfig {
    engine.config().clone()
}

/// Apply a saved configuration through the engine's setters.
pub fn restore(engine: &mut ThemeEngine, config: &ThemeConfig) {
    engine.set_palette(config.palette);
    engine.set_gradient_shape(config.gradient_shape);

    engine.set_geometry_field(GeometryField::Angle, config.geometry.angle);
    engine.set_geometry_field(GeometryField::StartPosition, config.geometry.start_position);
    engine.set_geometry_field(GeometryField::EndPosition, config.geometry.end_position);
    engine.set_geometry_field(GeometryField::Intensity, config.geometry.intensity);
    engine.set_geometry_field(GeometryField::Spread, config.geometry.spread);

    engine.set_background_mode(config.background_mode);
    engine.set_background_field(BackgroundField::SolidColor(
        config.background.solid_color.clone(),
    ));
    engine.set_background_field(BackgroundField::PatternKind(
        config.background.pattern_kind,
    ));
    engine.set_background_field(BackgroundField::PatternOpacity(
        config.background.pattern_opacity,
    ));
}
