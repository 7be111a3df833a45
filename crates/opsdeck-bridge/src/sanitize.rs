//! CSS value sanitization for the webview injection surface.
//!
//! Only allows the value shapes the engine actually emits:
//! - Hex colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)` with numeric arguments
//! - Numeric values with optional unit: `14px`, `0.5`, `90deg`
//! - CSS image-generator expressions (gradient functions only)
//!
//! Rejects anything containing: `expression(`, `url(`, `javascript:`,
//! `eval(`, `import`, `;`, `}`, `{`, `@`, `<`, `>`

/// Validate a CSS color value.
///
/// Accepts hex and `rgb()`/`rgba()` with numeric args. Named colors are
/// rejected on purpose — the engine never emits them, so anything else
/// is an injection attempt or a bug upstream.
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS color value".to_string());
    }

    check_injection_patterns(trimmed)?;

    if trimmed.starts_with('#') {
        return validate_hex_color(trimmed);
    }

    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }

    Err(format!(
        "Invalid CSS color: only hex (#rrggbb) and rgb()/rgba() allowed, got '{trimmed}'"
    ))
}

/// Validate a CSS numeric value (opacity, angle, size).
///
/// Accepts integers and floats with an optional `px`, `em`, `rem`, `%`,
/// `deg` or `ms` unit.
pub fn validate_css_numeric(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS numeric value".to_string());
    }

    check_injection_patterns(trimmed)?;

    // rem must be stripped before em, or "14rem" is left as "14r"
    let numeric_part = trimmed
        .trim_end_matches("px")
        .trim_end_matches("rem")
        .trim_end_matches("em")
        .trim_end_matches("deg")
        .trim_end_matches("ms")
        .trim_end_matches('%');

    if numeric_part.parse::<f64>().is_err() {
        return Err(format!("Invalid CSS numeric value: '{trimmed}'"));
    }

    Ok(())
}

/// Validate a CSS image value: gradient generator functions only.
///
/// This is what the pattern backgrounds and the gradient projection emit.
/// `url()` never appears in engine output, so it is always rejected.
pub fn validate_css_image(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS image value".to_string());
    }

    check_injection_patterns(trimmed)?;

    const GENERATORS: &[&str] = &[
        "linear-gradient(",
        "radial-gradient(",
        "conic-gradient(",
        "repeating-linear-gradient(",
        "repeating-radial-gradient(",
    ];

    // Multi-layer images are comma-separated generator calls; checking
    // the head of the value is enough once injection characters are out.
    if !GENERATORS.iter().any(|g| trimmed.starts_with(g)) {
        return Err(format!(
            "Invalid CSS image: only gradient generators allowed, got '{trimmed}'"
        ));
    }

    if !trimmed.ends_with(')') {
        return Err(format!("Unterminated CSS image expression: '{trimmed}'"));
    }

    for ch in trimmed.chars() {
        if !ch.is_ascii_alphanumeric()
            && !matches!(ch, ' ' | ',' | '.' | '%' | '-' | '(' | ')')
        {
            return Err(format!("Invalid character '{ch}' in CSS image: '{trimmed}'"));
        }
    }

    Ok(())
}

/// Validate a keyword-ish value such as `background-size` tiles
/// (`24px 24px`, `auto`, `cover`).
pub fn validate_css_size(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS size value".to_string());
    }

    check_injection_patterns(trimmed)?;

    for ch in trimmed.chars() {
        if !ch.is_ascii_alphanumeric() && !matches!(ch, ' ' | '.' | '%') {
            return Err(format!("Invalid character '{ch}' in CSS size: '{trimmed}'"));
        }
    }

    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

/// Check for common CSS injection patterns.
fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();

    let dangerous = [
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "import",
        "@",
        ";",
        "{",
        "}",
        "<",
        ">",
        "\\",
        "/*",
    ];

    for pattern in dangerous {
        if lower.contains(pattern) {
            return Err(format!("Dangerous pattern '{pattern}' in CSS value"));
        }
    }

    Ok(())
}

fn validate_hex_color(value: &str) -> Result<(), String> {
    let digits = &value[1..];
    if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(format!("Invalid hex color length: '{value}'"));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex digit in color: '{value}'"));
    }
    Ok(())
}

fn validate_rgb_function(value: &str) -> Result<(), String> {
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| format!("Malformed rgb()/rgba() value: '{value}'"))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if !matches!(parts.len(), 3 | 4) {
        return Err(format!("Wrong number of rgb()/rgba() arguments: '{value}'"));
    }

    for part in parts {
        if part.parse::<f64>().is_err() {
            return Err(format!("Non-numeric rgb()/rgba() argument '{part}'"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_engine_colors() {
        assert!(validate_css_color("#8b5cf6").is_ok());
        assert!(validate_css_color("#fff").is_ok());
        assert!(validate_css_color("rgba(139, 92, 246, 0.5)").is_ok());
        assert!(validate_css_color("rgb(148, 163, 184)").is_ok());
    }

    #[test]
    fn rejects_named_and_malformed_colors() {
        assert!(validate_css_color("red").is_err());
        assert!(validate_css_color("").is_err());
        assert!(validate_css_color("#12345").is_err());
        assert!(validate_css_color("rgba(1,2)").is_err());
        assert!(validate_css_color("rgba(1,2,3,evil)").is_err());
    }

    #[test]
    fn rejects_injection_in_colors() {
        assert!(validate_css_color("red; } body { color: evil").is_err());
        assert!(validate_css_color("expression(alert(1))").is_err());
        assert!(validate_css_color("#fff<script>").is_err());
    }

    #[test]
    fn accepts_numeric_with_units() {
        assert!(validate_css_numeric("0.5").is_ok());
        assert!(validate_css_numeric("14px").is_ok());
        assert!(validate_css_numeric("1.2em").is_ok());
        assert!(validate_css_numeric("14rem").is_ok());
        assert!(validate_css_numeric("90deg").is_ok());
        assert!(validate_css_numeric("-50").is_ok());
        assert!(validate_css_numeric("9000").is_ok());
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(validate_css_numeric("abc").is_err());
        assert!(validate_css_numeric("14px; evil").is_err());
    }

    #[test]
    fn accepts_engine_image_expressions() {
        assert!(validate_css_image(
            "linear-gradient(90deg, rgba(139, 92, 246, 1) 0%, rgba(147, 51, 234, 1) 100%)"
        )
        .is_ok());
        assert!(validate_css_image(
            "radial-gradient(circle, rgba(148, 163, 184, 0.1) 1px, transparent 1px)"
        )
        .is_ok());
        assert!(validate_css_image(
            "repeating-linear-gradient(45deg, rgba(148, 163, 184, 0.1) 0, \
             rgba(148, 163, 184, 0.1) 1px, transparent 1px, transparent 12px)"
        )
        .is_ok());
    }

    #[test]
    fn rejects_url_and_foreign_functions() {
        assert!(validate_css_image("url(https://evil.example/x.png)").is_err());
        assert!(validate_css_image("image-set(url(a))").is_err());
        assert!(validate_css_image("linear-gradient(url(x))").is_err());
        assert!(validate_css_image("linear-gradient(90deg, red 0%").is_err());
    }

    #[test]
    fn size_values() {
        assert!(validate_css_size("24px 24px").is_ok());
        assert!(validate_css_size("auto").is_ok());
        assert!(validate_css_size("auto; }").is_err());
    }
}
