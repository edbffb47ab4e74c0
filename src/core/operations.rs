//! Dimensional formulas for USAF 1951 resolution patterns.
//!
//! Every value is rounded to two decimal places, halves away from zero,
//! and each formula consumes the already-rounded output of the previous
//! one. Under this discipline `line_height_um(7, 6)` is 10.95.
//!
//! No bounds are enforced on `group` or `element`; the conventional 1-6
//! element cycle is the caller's concern.

/// Two decimal places, halves away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Line pairs per millimeter: `2^(group + (element - 1) / 6)`.
pub fn line_pairs_per_mm(group: i32, element: i32) -> f64 {
    round2(2f64.powf(f64::from(group) + (f64::from(element) - 1.0) / 6.0))
}

/// Width in microns of a single line at the given resolution.
pub fn line_width_um(group: i32, element: i32) -> f64 {
    round2(1000.0 / (line_pairs_per_mm(group, element) * 2.0))
}

/// Height in microns of a single line, five times its width.
pub fn line_height_um(group: i32, element: i32) -> f64 {
    round2(5.0 * line_width_um(group, element))
}
