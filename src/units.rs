//! Distance formatting for measurement labels.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

/// Format a distance in meters for display on a measurement label.
///
/// Distances of a meter or more render in meters with two decimals
/// ("1.00 m", "2.50 m"); anything shorter renders as whole centimeters
/// ("35 cm"). The meter threshold is checked against the unrounded
/// centimeter value, so 99.5 cm rounds up and still displays as "100 cm".
#[must_use]
pub fn format_distance(meters: f64) -> String {
    let cm = meters * 100.0;
    if cm >= 100.0 {
        format!("{meters:.2} m")
    } else {
        format!("{} cm", cm.round())
    }
}
