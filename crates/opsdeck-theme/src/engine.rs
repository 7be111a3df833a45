//! The theme engine: configuration state plus memoized projections.
//!
//! Several dashboard surfaces derive their own values from the engine's
//! output inside their own render path, so each projection must come back
//! identical across reads that do not change its inputs. The projections
//! are cached in per-projection cells and handed out as `Rc` clones;
//! a setter invalidates exactly the cells whose inputs it wrote, and
//! nothing else.
//!
//! Everything here is single-threaded by construction (`RefCell`, `Rc`).
//! There is one writer and no suspension point, so no locking.

use crate::background::{BackgroundField, BackgroundMode};
use crate::config::ThemeConfig;
use crate::css;
use crate::geometry::{GeometryField, GradientShape};
use crate::palette::{ColorPair, Palette};
use crate::projection::{ComposedBackground, StyleClassBundle};
use std::cell::RefCell;
use std::rc::Rc;

/// A lazily-computed cached value handed out by shared handle.
#[derive(Debug)]
struct MemoCell<T> {
    slot: RefCell<Option<Rc<T>>>,
}

impl<T> MemoCell<T> {
    fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    fn get_or_compute(&self, compute: impl FnOnce() -> T) -> Rc<T> {
        let mut slot = self.slot.borrow_mut();
        if let Some(cached) = slot.as_ref() {
            return Rc::clone(cached);
        }
        let value = Rc::new(compute());
        *slot = Some(Rc::clone(&value));
        value
    }

    fn invalidate(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Single source of truth for all visual-presentation parameters.
///
/// Construct one per session (or per test); there is no ambient global
/// instance. Setters accept any value of the right type verbatim — the
/// engine performs no range validation and has no failure mode.
#[derive(Debug)]
pub struct ThemeEngine {
    config: ThemeConfig,
    gradient: MemoCell<String>,
    classes: MemoCell<StyleClassBundle>,
    background: MemoCell<ComposedBackground>,
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeEngine {
    pub fn new() -> Self {
        Self::with_config(ThemeConfig::default())
    }

    pub fn with_config(config: ThemeConfig) -> Self {
        Self {
            config,
            gradient: MemoCell::new(),
            classes: MemoCell::new(),
            background: MemoCell::new(),
        }
    }

    /// The current configuration, read-only.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Setters. Each invalidates exactly the projections that read the
    // written field:
    //   palette/shape  -> gradient string, class bundle, background
    //   geometry       -> gradient string, background
    //   background     -> background only
    // ------------------------------------------------------------------

    pub fn set_palette(&mut self, palette: Palette) {
        self.config.palette = palette;
        self.gradient.invalidate();
        self.classes.invalidate();
        self.background.invalidate();
    }

    pub fn set_gradient_shape(&mut self, shape: GradientShape) {
        self.config.gradient_shape = shape;
        self.gradient.invalidate();
        self.classes.invalidate();
        self.background.invalidate();
    }

    pub fn set_geometry_field(&mut self, field: GeometryField, value: f64) {
        self.config.geometry.set(field, value);
        self.gradient.invalidate();
        self.background.invalidate();
    }

    pub fn set_background_mode(&mut self, mode: BackgroundMode) {
        self.config.background_mode = mode;
        self.background.invalidate();
    }

    pub fn set_background_field(&mut self, field: BackgroundField) {
        self.config.background.set(field);
        self.background.invalidate();
    }

    /// Whole-configuration replacement back to the fixed defaults.
    pub fn reset(&mut self) {
        self.config = ThemeConfig::default();
        self.gradient.invalidate();
        self.classes.invalidate();
        self.background.invalidate();
    }

    // ------------------------------------------------------------------
    // Derived projections. Stable across reads with no intervening
    // setter call: the same Rc comes back, observable via Rc::ptr_eq.
    // ------------------------------------------------------------------

    /// The CSS gradient function call string.
    pub fn gradient_color_string(&self) -> Rc<String> {
        self.gradient.get_or_compute(|| {
            css::gradient_color_string(
                self.config.palette,
                self.config.gradient_shape,
                &self.config.geometry,
            )
        })
    }

    /// Utility class tokens for the current palette/shape combination.
    pub fn style_class_bundle(&self) -> Rc<StyleClassBundle> {
        self.classes.get_or_compute(|| {
            StyleClassBundle::for_combination(
                self.config.palette,
                self.config.gradient_shape,
            )
        })
    }

    /// The composed page-background style object.
    pub fn composed_background(&self) -> Rc<ComposedBackground> {
        self.background
            .get_or_compute(|| ComposedBackground::compose(&self.config))
    }

    // ------------------------------------------------------------------
    // Static lookups, dependent on the palette field only.
    // ------------------------------------------------------------------

    pub fn primary_colors(&self) -> ColorPair {
        self.config.palette.primary_colors()
    }

    pub fn accent_colors(&self) -> ColorPair {
        self.config.palette.accent_colors()
    }
}
