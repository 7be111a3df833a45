//! Opsdeck theme engine.
//!
//! Owns all visual-configuration state (palette, gradient geometry,
//! background composition) and exposes three derived, memoized
//! projections consumed by every dashboard surface: the CSS gradient
//! string, a utility class bundle, and the composed page background.
//!
//! # Quick Start
//!
//! ```rust
//! use opsdeck_theme::{GeometryField, Palette, ThemeEngine};
//!
//! let mut engine = ThemeEngine::new();
//! engine.set_palette(Palette::Ocean);
//! engine.set_geometry_field(GeometryField::Angle, 135.0);
//! let gradient = engine.gradient_color_string();
//! assert!(gradient.starts_with("linear-gradient(135deg,"));
//! ```

pub mod background;
pub mod config;
pub mod css;
pub mod engine;
pub mod geometry;
pub mod palette;
pub mod projection;

pub use background::{BackgroundField, BackgroundMode, BackgroundSettings, PatternKind};
pub use config::ThemeConfig;
pub use engine::ThemeEngine;
pub use geometry::{GeometryField, GradientGeometry, GradientShape};
pub use palette::{ColorPair, Palette};
pub use projection::{ComposedBackground, StyleClassBundle};
