/// Reads an optional metric, treating absent or non-finite values as `default`.
#[must_use]
pub fn finite_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

#[must_use]
pub fn floor_at_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

/// `count / total * 100`, or 0 when nothing was played.
#[must_use]
pub fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(count) / f64::from(total) * 100.0
}

/// Plain division that answers 0 instead of NaN or infinity.
#[must_use]
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return 0.0;
    }
    numerator / denominator
}

/// Rounds like `Math.round`: halves go towards positive infinity.
#[must_use]
pub fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Formats like `Number.prototype.toFixed`: the magnitude is rounded with ties going up,
/// the sign is put back afterwards (so `-0.04` prints as `-0.0`).
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", digits, 0.0);
    }
    let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let magnitude = (value.abs() * scale + 0.5).floor() / scale;
    let formatted = format!("{magnitude:.digits$}");
    if value < 0.0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// `"+6.3%"` style label: explicit plus sign when the underlying change is non-negative.
#[must_use]
pub fn signed_percent(non_negative: bool, percent: f64) -> String {
    let sign = if non_negative { "+" } else { "" };
    format!("{sign}{}%", to_fixed(percent, 1))
}

/// Strokes that were neither putts nor penalties; never negative.
#[must_use]
pub fn other_strokes(strokes: u32, putts: u32, penalties: u32) -> u32 {
    strokes.saturating_sub(putts).saturating_sub(penalties)
}
