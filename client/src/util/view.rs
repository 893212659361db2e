//! Pure formatting helpers for component attributes.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// CSS `opacity` value, without trailing zeros.
pub fn opacity_style(opacity: f32) -> String {
    let rounded = (opacity.clamp(0.0, 1.0) * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// Parse a computed CSS length such as `"600px"` into pixels.
pub fn parse_px(raw: &str) -> Option<f64> {
    let value = raw.trim().strip_suffix("px")?.trim();
    value.parse::<f64>().ok().filter(|px| px.is_finite())
}
