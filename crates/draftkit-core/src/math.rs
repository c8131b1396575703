//! Shared numeric helpers and id minting.

use uuid::Uuid;

/// Rounds `value` to the nearest multiple of `factor`.
pub fn round_to_multiple_of(value: f64, factor: f64) -> f64 {
    (value / factor).round() * factor
}

/// Rounds `value` to the nearest multiple of two. Text constraints use
/// this so measured boxes stay centered on the pixel grid.
pub fn round_to_multiple_of_two(value: f64) -> f64 {
    round_to_multiple_of(value, 2.0)
}

/// Normalizes an angle in degrees to `[0, 360)`.
pub fn to_positive_degree(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Mints a fresh document id (UUID v4, compact form).
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
