//! Palette definitions and static color lookups.
//!
//! A palette is a fixed from/to color pair seeding every gradient, plus an
//! accent pair for secondary surfaces (navigation highlight, focus rings).
//! The set is closed: consumers can never feed arbitrary colors in.

use serde::{Deserialize, Serialize};

/// The four named gradient palettes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Purple,
    Ocean,
    Ember,
    Forest,
}

/// A from/to pair of hex color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub from: &'static str,
    pub to: &'static str,
}

impl Palette {
    pub const ALL: [Palette; 4] = [
        Palette::Purple,
        Palette::Ocean,
        Palette::Ember,
        Palette::Forest,
    ];

    /// The primary gradient seed pair for this palette.
    pub const fn primary_colors(self) -> ColorPair {
        match self {
            Palette::Purple => ColorPair { from: "#8b5cf6", to: "#9333ea" },
            Palette::Ocean => ColorPair { from: "#3b82f6", to: "#06b6d4" },
            Palette::Ember => ColorPair { from: "#f59e0b", to: "#ef4444" },
            Palette::Forest => ColorPair { from: "#10b981", to: "#059669" },
        }
    }

    /// The accent pair (light/dark) for secondary surfaces.
    pub const fn accent_colors(self) -> ColorPair {
        match self {
            Palette::Purple => ColorPair { from: "#a78bfa", to: "#7c3aed" },
            Palette::Ocean => ColorPair { from: "#60a5fa", to: "#0891b2" },
            Palette::Ember => ColorPair { from: "#fbbf24", to: "#dc2626" },
            Palette::Forest => ColorPair { from: "#34d399", to: "#047857" },
        }
    }

    /// Utility class tokens for consumers that style through class names
    /// instead of inline styles.
    pub const fn class_tokens(self) -> PaletteClassTokens {
        match self {
            Palette::Purple => PaletteClassTokens {
                from: "from-violet-500",
                to: "to-purple-600",
                text: "text-violet-400",
                border: "border-violet-500",
            },
            Palette::Ocean => PaletteClassTokens {
                from: "from-blue-500",
                to: "to-cyan-500",
                text: "text-blue-400",
                border: "border-blue-500",
            },
            Palette::Ember => PaletteClassTokens {
                from: "from-amber-500",
                to: "to-red-500",
                text: "text-amber-400",
                border: "border-amber-500",
            },
            Palette::Forest => PaletteClassTokens {
                from: "from-emerald-500",
                to: "to-emerald-600",
                text: "text-emerald-400",
                border: "border-emerald-500",
            },
        }
    }
}

/// Per-palette utility class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteClassTokens {
    pub from: &'static str,
    pub to: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}
