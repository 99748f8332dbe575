//! Human-readable byte counts and savings percentages

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const BASE: f64 = 1024.0;

/// Format a byte count using base-1024 units.
///
/// The value is printed with at most two decimals and trailing zeros are
/// dropped, so `1536` becomes `1.5 KB` and `1024` becomes `1 KB`. Anything at
/// or above 1024 GB is still expressed in GB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit + 1 < UNITS.len() && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / BASE.powi(unit as i32);
    format!("{} {}", trim_decimals(value), UNITS[unit])
}

/// Round to `decimals` places with halves going away from zero.
///
/// `format!("{:.2}")` alone rounds ties to even, which turns an exact
/// `1.125` into `1.12`.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", round_half_up(value, 2));
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Percentage of bytes saved going from `original` to `compressed`.
///
/// Returns `None` when the original size is zero, as no ratio exists.
/// Negative values mean the output grew.
pub fn savings_percent(original: u64, compressed: u64) -> Option<f64> {
    if original == 0 {
        return None;
    }
    Some((1.0 - compressed as f64 / original as f64) * 100.0)
}

/// Render a savings percentage with one decimal, or `n/a` when undefined
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.1}", round_half_up(p, 1)),
        None => "n/a".to_string(),
    }
}
