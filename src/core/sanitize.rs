// src/core/sanitize.rs

/// Matching key for a display name: lowercase, then keep alphanumerics only.
/// Lowercasing first keeps the transform idempotent for characters whose
/// lowercase form expands into combining marks.
pub fn normalize_name(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Same as `normalize_name`, with a missing name mapping to the empty key.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize_name).unwrap_or_default()
}

/// Trim a raw CSV cell; empty cells become absent.
pub fn clean_field(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let t = raw.trim();
    if t.is_empty() {
        None
    } else if t.len() == raw.len() {
        Some(raw)
    } else {
        Some(t.to_string())
    }
}

/// Parse an age cell. Accepts integers and decimals (`22`, `22.0`);
/// anything else, including NaN and infinities, is treated as absent.
pub fn parse_age(raw: Option<&str>) -> Option<f64> {
    let v: f64 = raw?.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

/// Display form of an age: whole numbers without a trailing `.0`.
pub fn fmt_age(age: f64) -> String {
    if age.fract() == 0.0 {
        format!("{}", age as i64)
    } else {
        format!("{age}")
    }
}
