/// Tolerance for geometric comparisons on derived quantities.
pub(crate) const EPSILON: f64 = 1e-10;

/// Rounds `value` to `precision` decimal places, halves toward positive infinity.
///
/// The shift goes through the decimal text of the number rather than a multiplication, so
/// `1.0005` becomes `1.001` instead of falling victim to `1000.4999...`.
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let shifted: f64 = format!("{value}e{precision}").parse().unwrap_or(value);
    let floor = shifted.floor();
    let rounded = if shifted - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    let out: f64 = format!("{rounded}e-{precision}").parse().unwrap_or(value);
    // Never surface `-0`.
    if out == 0.0 { 0.0 } else { out }
}

/// Shortest decimal rendering of `value` after rounding (`9.877`, `0`, `-2.5`).
pub(crate) fn format_number(value: f64, precision: u32) -> String {
    round_to(value, precision).to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
