//! Theme bridge: CSS generation and sanitization for the dashboard webview.
//!
//! Converts engine projections into safe CSS custom properties and
//! injection snippets. All values are validated to prevent CSS injection.

pub mod generate;
pub mod sanitize;

pub use generate::{
    engine_css_variables, generate_background_css, generate_css_injection_js,
    generate_css_root, CssValueKind,
};
pub use sanitize::{
    validate_css_color, validate_css_image, validate_css_numeric, validate_css_size,
};
