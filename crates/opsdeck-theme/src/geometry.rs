//! Gradient shape and numeric geometry controls.

use serde::{Deserialize, Serialize};

/// Which CSS gradient function the projection emits.
///
/// `Diagonal` renders identically to `Linear`; it exists so consumers can
/// offer it as a distinct preset (the angle control does the work).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientShape {
    #[default]
    Linear,
    Radial,
    Conic,
    Diagonal,
}

impl GradientShape {
    pub const ALL: [GradientShape; 4] = [
        GradientShape::Linear,
        GradientShape::Radial,
        GradientShape::Conic,
        GradientShape::Diagonal,
    ];

    /// Class token for the shape half of the class bundle.
    pub const fn class_token(self) -> &'static str {
        match self {
            GradientShape::Linear => "bg-gradient-to-r",
            GradientShape::Radial => "bg-gradient-radial",
            GradientShape::Conic => "bg-gradient-conic",
            GradientShape::Diagonal => "bg-gradient-to-br",
        }
    }
}

/// The five numeric gradient controls.
///
/// None of these are clamped: an `angle` of 9000 or a negative stop goes
/// through verbatim and renders however the browser renders it. Consumers
/// that want bounded inputs bound them at their own surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientGeometry {
    /// Gradient angle in degrees.
    pub angle: f64,
    /// First color stop position, percent.
    pub start_position: f64,
    /// Last color stop position, percent.
    pub end_position: f64,
    /// 0-100, mapped to the alpha channel of both stops.
    pub intensity: f64,
    /// Secondary stop / center position, percent. Radial gradients use it
    /// as the horizontal center; conic gradients as the middle stop.
    pub spread: f64,
}

impl Default for GradientGeometry {
    fn default() -> Self {
        Self {
            angle: 90.0,
            start_position: 0.0,
            end_position: 100.0,
            intensity: 100.0,
            spread: 50.0,
        }
    }
}

/// Keys for field-wise geometry updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryField {
    Angle,
    StartPosition,
    EndPosition,
    Intensity,
    Spread,
}

impl GradientGeometry {
    /// Write one field. The value is stored as-is.
    pub fn set(&mut self, field: GeometryField, value: f64) {
        match field {
            GeometryField::Angle => self.angle = value,
            GeometryField::StartPosition => self.start_position = value,
            GeometryField::EndPosition => self.end_position = value,
            GeometryField::Intensity => self.intensity = value,
            GeometryField::Spread => self.spread = value,
        }
    }
}
