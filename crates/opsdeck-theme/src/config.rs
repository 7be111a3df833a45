//! The aggregate theme configuration.
//!
//! All fields use serde defaults so a partial snapshot restores cleanly.

use crate::background::{BackgroundMode, BackgroundSettings};
use crate::geometry::{GradientGeometry, GradientShape};
use crate::palette::Palette;
use serde::{Deserialize, Serialize};

/// The full user-selectable visual configuration.
///
/// Created once per session with fixed defaults, mutated only through
/// [`ThemeEngine`](crate::ThemeEngine) setters, replaced wholesale on
/// reset or snapshot restore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub palette: Palette,
    pub gradient_shape: GradientShape,
    pub geometry: GradientGeometry,
    pub background_mode: BackgroundMode,
    pub background: BackgroundSettings,
}
